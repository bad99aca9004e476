use crate::config::GeneratorConfig;
use crate::{LoremError, Request, Result, words};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Positions at or past this offset within a block never get a comma.
const COMMA_WINDOW: usize = 5;

/// Builds placeholder text from a private, reshuffled vocabulary.
///
/// Generation takes `&mut self`: every sentence reshuffles the vocabulary
/// and draws from the random source, so output for equal inputs differs
/// between calls unless the generator was seeded.
#[derive(Debug)]
pub struct Generator<R = StdRng> {
    words: Vec<String>,
    config: GeneratorConfig,
    rng: R,
}

impl Generator<StdRng> {
    /// A generator with the default config, the compiled-in vocabulary and an
    /// entropy-seeded random source.
    pub fn new() -> Self {
        Self::from_parts(
            words::vocabulary(),
            GeneratorConfig::default(),
            StdRng::from_os_rng(),
            false,
        )
    }

    pub fn with_config(config: GeneratorConfig) -> Result<Self> {
        Self::builder().config(config).build()
    }

    /// A generator whose config comes from the defaults overridden by
    /// `WORDS_PER_SENTENCE`, `SENTENCES_PER_PARAGRAPH` and `COMMA_CHANCE`.
    pub fn from_env() -> Self {
        Self::from_parts(
            words::vocabulary(),
            GeneratorConfig::default().with_env(),
            StdRng::from_os_rng(),
            false,
        )
    }

    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::default()
    }
}

impl Default for Generator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    fn from_parts(
        words: Vec<String>,
        config: GeneratorConfig,
        rng: R,
        seeded: bool,
    ) -> Self {
        tracing::debug!(
            vocabulary = words.len(),
            seeded,
            words_per_sentence = config.words_per_sentence,
            sentences_per_paragraph = config.sentences_per_paragraph,
            comma_chance = config.comma_chance,
            "generator ready"
        );
        Self { words, config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The vocabulary in its current shuffle order.
    pub fn vocabulary(&self) -> &[String] {
        &self.words
    }

    /// Permute the vocabulary in place.
    pub fn shuffle(&mut self) {
        self.words.shuffle(&mut self.rng);
    }

    /// One span of exactly `n` words. Spans longer than `words_per_sentence`
    /// are split into period-terminated blocks.
    pub fn generate(&mut self, n: usize) -> String {
        self.build_sentence(n)
    }

    /// `n` paragraphs separated by a blank line.
    pub fn generate_paragraphs(&mut self, n: usize) -> String {
        (0..n)
            .map(|_| self.build_paragraph())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Paragraphs when requested, otherwise words, otherwise nothing.
    pub fn generate_from(&mut self, request: &Request) -> String {
        if request.paragraphs > 0 {
            self.generate_paragraphs(request.paragraphs)
        } else if request.words > 0 {
            self.generate(request.words)
        } else {
            String::new()
        }
    }

    fn build_paragraph(&mut self) -> String {
        let per_sentence = self.config.words_per_sentence;
        (0..self.config.sentences_per_paragraph)
            .map(|_| self.build_sentence(per_sentence))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn build_sentence(&mut self, n: usize) -> String {
        if n == 0 {
            return String::new();
        }

        self.shuffle();
        tracing::trace!(words = n, "building sentence");

        let per_sentence = self.config.words_per_sentence;
        let mut sentence = String::new();

        for i in 0..n {
            let position = i + 1;
            let word = &self.words[i % self.words.len()];

            if i > 0 {
                sentence.push(' ');
            }
            sentence.push_str(&process_word(word, position));

            if position == n || position % per_sentence == 0 {
                sentence.push('.');
            } else if i > 0 && self.wants_comma(position) {
                sentence.push(',');
            }
        }

        sentence
    }

    fn wants_comma(&mut self, position: usize) -> bool {
        let offset = position % self.config.words_per_sentence;
        offset != 0 && offset < COMMA_WINDOW && self.rng.random_ratio(1, self.config.comma_chance)
    }
}

/// Title-case the first word of a sentence; leave the rest alone.
fn process_word(word: &str, position: usize) -> String {
    if position == 1 {
        title_case(word)
    } else {
        word.to_string()
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Configures a [`Generator`]: vocabulary, shape and random source.
#[derive(Debug, Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
    vocabulary: Option<Vec<String>>,
    seed: Option<u64>,
}

impl GeneratorBuilder {
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn words_per_sentence(mut self, n: usize) -> Self {
        self.config.words_per_sentence = n;
        self
    }

    pub fn sentences_per_paragraph(mut self, n: usize) -> Self {
        self.config.sentences_per_paragraph = n;
        self
    }

    pub fn comma_chance(mut self, n: u32) -> Self {
        self.config.comma_chance = n;
        self
    }

    /// Replace the compiled-in vocabulary.
    pub fn vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = Some(words.into_iter().map(Into::into).collect());
        self
    }

    /// Seed the random source so output is reproducible.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Generator<StdRng>> {
        let (rng, seeded) = match self.seed {
            Some(seed) => (StdRng::seed_from_u64(seed), true),
            None => (StdRng::from_os_rng(), false),
        };
        self.finish(rng, seeded)
    }

    /// Build with a caller-supplied random source. Any configured seed is
    /// ignored.
    pub fn build_with_rng<R: Rng>(self, rng: R) -> Result<Generator<R>> {
        self.finish(rng, false)
    }

    fn finish<R: Rng>(self, rng: R, seeded: bool) -> Result<Generator<R>> {
        self.config.validate()?;

        let words = self.vocabulary.unwrap_or_else(words::vocabulary);
        if words.is_empty() {
            return Err(LoremError::EmptyVocabulary);
        }
        if let Some(bad) = words
            .iter()
            .find(|w| w.is_empty() || w.contains(char::is_whitespace))
        {
            return Err(LoremError::InvalidWord(bad.clone()));
        }

        Ok(Generator::from_parts(words, self.config, rng, seeded))
    }
}
