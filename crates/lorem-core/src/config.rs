use crate::{LoremError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_WORDS_PER_SENTENCE: usize = 10;
pub const DEFAULT_SENTENCES_PER_PARAGRAPH: usize = 5;
pub const DEFAULT_COMMA_CHANCE: u32 = 3;

pub const WORDS_PER_SENTENCE_VAR: &str = "WORDS_PER_SENTENCE";
pub const SENTENCES_PER_PARAGRAPH_VAR: &str = "SENTENCES_PER_PARAGRAPH";
pub const COMMA_CHANCE_VAR: &str = "COMMA_CHANCE";

/// Shape parameters for generated text.
///
/// Every field must be positive. `comma_chance` is a "1 in N" threshold: a
/// comma candidate is accepted with probability `1 / comma_chance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub words_per_sentence: usize,
    pub sentences_per_paragraph: usize,
    pub comma_chance: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            words_per_sentence: DEFAULT_WORDS_PER_SENTENCE,
            sentences_per_paragraph: DEFAULT_SENTENCES_PER_PARAGRAPH,
            comma_chance: DEFAULT_COMMA_CHANCE,
        }
    }
}

impl GeneratorConfig {
    /// Load a config from a TOML file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: GeneratorConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), ?config, "loaded config file");
        Ok(config)
    }

    /// Load the per-user config file if there is one, defaults otherwise.
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(default_path())
    }

    /// Load `path` when it names an existing file, defaults otherwise.
    pub fn load_or_default(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) if path.is_file() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_env_from(|var| std::env::var(var).ok())
    }

    /// Apply overrides using `lookup` to read variables.
    ///
    /// A variable that is unset, non-numeric, or not positive leaves the
    /// current value in place.
    pub fn with_env_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            words_per_sentence: env_override(
                &lookup,
                WORDS_PER_SENTENCE_VAR,
                self.words_per_sentence,
            ),
            sentences_per_paragraph: env_override(
                &lookup,
                SENTENCES_PER_PARAGRAPH_VAR,
                self.sentences_per_paragraph,
            ),
            comma_chance: env_override(&lookup, COMMA_CHANCE_VAR, self.comma_chance),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.words_per_sentence == 0 {
            return Err(LoremError::InvalidConfig(
                "words_per_sentence must be positive".to_string(),
            ));
        }
        if self.sentences_per_paragraph == 0 {
            return Err(LoremError::InvalidConfig(
                "sentences_per_paragraph must be positive".to_string(),
            ));
        }
        if self.comma_chance == 0 {
            return Err(LoremError::InvalidConfig(
                "comma_chance must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the per-user config file lives: `<config dir>/lorem/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lorem").join("config.toml"))
}

fn env_override<F, T>(lookup: &F, var: &str, current: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(var) else {
        return current;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            tracing::debug!(var, value = %raw, "ignoring invalid environment override");
            current
        }
    }
}
