//! Spelling corrector capability consumed by the tokenizer and featurizer.

use crate::error::Result;

/// A correction candidate for a single word.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub term: String,
    /// Score in `[0, 1]`; 1.0 means the word needs no change.
    pub confidence: f32,
}

impl Candidate {
    pub fn new(term: impl Into<String>, confidence: f32) -> Self {
        Self {
            term: term.into(),
            confidence,
        }
    }
}

/// Trait for spelling correction backends.
///
/// Implementations are language-scoped and stateless from the caller's
/// point of view: the same input always produces the same output.
pub trait SpellingCorrector: Send + Sync {
    /// Correct a full utterance.
    fn correct(&self, text: &str) -> Result<String>;

    /// Candidates for a single word, ordered by descending confidence.
    fn spellcheck_candidates(&self, word: &str) -> Result<Vec<Candidate>>;

    /// Language code this corrector handles.
    fn language(&self) -> &str;

    /// Return the name of this corrector for logging.
    fn name(&self) -> &str;

    /// Whether the backend can serve requests.
    fn is_ready(&self) -> bool {
        true
    }

    /// Confidence of the best candidate for `word`, 0.0 when there is none.
    fn best_confidence(&self, word: &str) -> Result<f32> {
        Ok(self
            .spellcheck_candidates(word)?
            .first()
            .map_or(0.0, |candidate| candidate.confidence))
    }
}

/// Passthrough corrector that treats every word as correct.
///
/// Useful for wiring a pipeline without a dictionary; every token comes out
/// unchanged with full confidence.
#[derive(Debug, Clone)]
pub struct PassthroughCorrector {
    language: String,
}

impl PassthroughCorrector {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl SpellingCorrector for PassthroughCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn spellcheck_candidates(&self, word: &str) -> Result<Vec<Candidate>> {
        Ok(vec![Candidate::new(word, 1.0)])
    }

    fn language(&self) -> &str {
        &self.language
    }

    fn name(&self) -> &str {
        "passthrough"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SpellfeatError;

    struct EmptyCandidates;

    impl SpellingCorrector for EmptyCandidates {
        fn correct(&self, text: &str) -> Result<String> {
            Ok(text.to_string())
        }
        fn spellcheck_candidates(&self, _word: &str) -> Result<Vec<Candidate>> {
            Ok(Vec::new())
        }
        fn language(&self) -> &str {
            "en"
        }
        fn name(&self) -> &str {
            "empty"
        }
    }

    struct Failing;

    impl SpellingCorrector for Failing {
        fn correct(&self, _text: &str) -> Result<String> {
            Err(SpellfeatError::CorrectorUnavailable {
                message: "down".into(),
            })
        }
        fn spellcheck_candidates(&self, _word: &str) -> Result<Vec<Candidate>> {
            Err(SpellfeatError::CorrectorUnavailable {
                message: "down".into(),
            })
        }
        fn language(&self) -> &str {
            "en"
        }
        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn passthrough_returns_text_unchanged() {
        let corrector = PassthroughCorrector::new("en");
        assert_eq!(corrector.correct("helo wrld").unwrap(), "helo wrld");
    }

    #[test]
    fn passthrough_reports_full_confidence() {
        let corrector = PassthroughCorrector::new("en");
        let candidates = corrector.spellcheck_candidates("wrld").unwrap();
        assert_eq!(candidates, vec![Candidate::new("wrld", 1.0)]);
        assert_eq!(corrector.best_confidence("wrld").unwrap(), 1.0);
    }

    #[test]
    fn passthrough_name_and_language() {
        let corrector = PassthroughCorrector::new("en");
        assert_eq!(corrector.name(), "passthrough");
        assert_eq!(corrector.language(), "en");
        assert!(corrector.is_ready());
    }

    #[test]
    fn best_confidence_without_candidates_is_zero() {
        assert_eq!(EmptyCandidates.best_confidence("xyzzy").unwrap(), 0.0);
    }

    #[test]
    fn best_confidence_propagates_errors() {
        let err = Failing.best_confidence("word").unwrap_err();
        assert!(matches!(err, SpellfeatError::CorrectorUnavailable { .. }));
    }

    #[test]
    fn corrector_trait_object_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn SpellingCorrector>();
        assert_send_sync::<PassthroughCorrector>();
    }
}
