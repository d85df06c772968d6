//! Dense featurizer that compares original and corrected words.
//!
//! Two columns per token: whether the corrector changed the word, and how
//! confident the corrector is in the original word. The aggregate row holds
//! "any word changed" and the lowest word confidence.

use crate::config::TokenizerConfig;
use crate::correction::SpellingCorrector;
use crate::defaults::NEUTRAL_CONFIDENCE;
use crate::error::{Result, SpellfeatError};
use crate::featurizer::merge::combine_dense;
use crate::message::{FeatureKind, Message, Token};
use crate::pipeline::Component;
use crate::tokenizer::aligning::check_capability;
use ndarray::Array2;
use std::sync::Arc;

/// Column index of the "correction made" flag.
pub const CORRECTION_MADE: usize = 0;
/// Column index of the original word's confidence.
pub const CONFIDENCE: usize = 1;
/// Columns this featurizer appends.
pub const FEATURE_COLUMNS: usize = 2;

pub struct CorrectionFeaturizer {
    corrector: Arc<dyn SpellingCorrector>,
    attribute: String,
}

impl std::fmt::Debug for CorrectionFeaturizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorrectionFeaturizer")
            .field("corrector", &self.corrector.name())
            .field("attribute", &self.attribute)
            .finish()
    }
}

impl CorrectionFeaturizer {
    pub fn new(corrector: Arc<dyn SpellingCorrector>, config: &TokenizerConfig) -> Result<Self> {
        check_capability(corrector.as_ref(), config)?;
        Ok(Self {
            corrector,
            attribute: config.attribute.clone(),
        })
    }

    pub fn attribute(&self) -> &str {
        &self.attribute
    }

    pub fn kind(&self) -> FeatureKind {
        FeatureKind::Dense
    }

    /// Compute this featurizer's columns for a tokenized message.
    ///
    /// Rows follow the message tokens; the last row belongs to the
    /// aggregate token.
    pub fn compute(&self, message: &Message) -> Result<Array2<f32>> {
        if !message.tokens.last().is_some_and(Token::is_aggregate) {
            return Err(SpellfeatError::MissingTokens {
                attribute: self.attribute.clone(),
            });
        }

        let corrected = message.word_tokens();
        let original = &message.original_words;
        if corrected.len() != original.len() {
            // Pairwise comparison stops at the shorter sequence.
            tracing::trace!(
                original = original.len(),
                corrected = corrected.len(),
                "word counts differ after correction"
            );
        }

        let confidences = original
            .iter()
            .map(|word| self.corrector.best_confidence(word))
            .collect::<Result<Vec<f32>>>()?;

        let mut features = Array2::<f32>::zeros((message.tokens.len(), FEATURE_COLUMNS));
        let mut any_corrected = false;

        for (row, token) in corrected.iter().enumerate() {
            let (changed, confidence) = match original.get(row) {
                Some(word) => (token.text != *word, confidences[row]),
                None => (false, NEUTRAL_CONFIDENCE),
            };
            any_corrected |= changed;
            features[[row, CORRECTION_MADE]] = if changed { 1.0 } else { 0.0 };
            features[[row, CONFIDENCE]] = confidence;
        }

        let aggregate = corrected.len();
        features[[aggregate, CORRECTION_MADE]] = if any_corrected { 1.0 } else { 0.0 };
        features[[aggregate, CONFIDENCE]] = confidences
            .iter()
            .copied()
            .fold(NEUTRAL_CONFIDENCE, f32::min);

        Ok(features)
    }
}

impl Component for CorrectionFeaturizer {
    fn name(&self) -> &'static str {
        "CorrectionFeaturizer"
    }

    fn process(&self, message: &mut Message) -> Result<()> {
        let features = self.compute(message)?;
        let merged = combine_dense(
            &self.attribute,
            message.features(self.kind(), &self.attribute),
            features,
        )?;
        message.set_features(self.kind(), self.attribute.clone(), merged);
        Ok(())
    }
}
