//! Spelling correction backends.

pub mod corrector;
#[cfg(feature = "symspell")]
pub mod symspell;

pub use corrector::{Candidate, PassthroughCorrector, SpellingCorrector};
