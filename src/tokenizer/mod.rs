//! Word splitting and correction-aware tokenization.

pub mod aligning;
pub mod splitter;

pub use aligning::{AligningTokenizer, Tokenized, tokens_from_words};
pub use splitter::split_words;
