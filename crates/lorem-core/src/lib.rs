//! Placeholder "lorem ipsum" text generation.
//!
//! The [`Generator`] owns a private, shuffled copy of the vocabulary and a
//! random source. It produces word spans with [`Generator::generate`] and
//! whole paragraphs with [`Generator::generate_paragraphs`].

pub mod config;
pub mod generator;
pub mod words;

pub use config::GeneratorConfig;
pub use generator::{Generator, GeneratorBuilder};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoremError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Vocabulary is empty")]
    EmptyVocabulary,
    #[error("Invalid vocabulary word: {0:?}")]
    InvalidWord(String),
}

pub type Result<T> = std::result::Result<T, LoremError>;

/// What to generate: paragraphs take priority over words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Request {
    pub words: usize,
    pub paragraphs: usize,
}

impl Request {
    pub fn words(words: usize) -> Self {
        Self {
            words,
            paragraphs: 0,
        }
    }

    pub fn paragraphs(paragraphs: usize) -> Self {
        Self {
            words: 0,
            paragraphs,
        }
    }
}

/// Generate text for `request` with a fresh generator configured from the
/// environment.
pub fn generate_ipsum(request: Request) -> String {
    Generator::from_env().generate_from(&request)
}
