//! spellfeat - Spelling-correction aware tokenization and featurization
//!
//! Splits an utterance into words, runs a spelling corrector over it, aligns
//! the corrected words back to character-offset tokens and derives per-token
//! "was corrected" and "corrector confidence" dense features.

#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::let_underscore_must_use)]

pub mod config;
pub mod correction;
pub mod defaults;
pub mod error;
pub mod featurizer;
pub mod message;
pub mod pipeline;
pub mod tokenizer;

// Message state shared between components
pub use message::{FeatureKind, Message, Token};

// Components
pub use featurizer::CorrectionFeaturizer;
pub use tokenizer::{AligningTokenizer, split_words};

// Spelling correction capability
pub use correction::{Candidate, SpellingCorrector};
#[cfg(feature = "symspell")]
pub use correction::symspell::SymSpellCorrector;

// Pipeline
pub use pipeline::{Component, Pipeline};

// Error handling
pub use error::{Result, SpellfeatError};

// Config
pub use config::{Config, CorrectionMode, CorrectorConfig, PipelineConfig, TokenizerConfig};
