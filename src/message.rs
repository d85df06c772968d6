//! Per-utterance state shared by the pipeline components.

use crate::defaults::AGGREGATE_TOKEN;
use ndarray::Array2;
use std::collections::HashMap;

/// A word-like unit with character offsets into the text it came from.
///
/// `start..end` counts `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }

    /// The synthetic trailing token that stands for the whole utterance.
    pub fn aggregate() -> Self {
        Self::new(AGGREGATE_TOKEN, 0, 0)
    }

    pub fn is_aggregate(&self) -> bool {
        self.text == AGGREGATE_TOKEN && self.start == 0 && self.end == 0
    }
}

/// Which feature store a featurizer writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    Dense,
    Sparse,
}

/// Context for a single utterance.
///
/// Created by the producer, filled in place by each component, then read by
/// downstream consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Message {
    pub text: String,
    /// Words of `text` before spelling correction.
    pub original_words: Vec<String>,
    /// Corrected, offset-aligned tokens followed by the aggregate token.
    pub tokens: Vec<Token>,
    /// Per-attribute dense matrices, one row per token.
    pub dense_features: HashMap<String, Array2<f32>>,
    /// Per-attribute sparse matrices; written by other featurizers only.
    pub sparse_features: HashMap<String, Array2<f32>>,
}

impl Message {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Feature matrix of the given kind for an attribute, if any.
    pub fn features(&self, kind: FeatureKind, attribute: &str) -> Option<&Array2<f32>> {
        match kind {
            FeatureKind::Dense => self.dense_features.get(attribute),
            FeatureKind::Sparse => self.sparse_features.get(attribute),
        }
    }

    /// Store `matrix` under `attribute` in the store of the given kind,
    /// replacing any previous entry.
    pub fn set_features(
        &mut self,
        kind: FeatureKind,
        attribute: impl Into<String>,
        matrix: Array2<f32>,
    ) {
        let store = match kind {
            FeatureKind::Dense => &mut self.dense_features,
            FeatureKind::Sparse => &mut self.sparse_features,
        };
        store.insert(attribute.into(), matrix);
    }

    /// Word tokens, without the trailing aggregate token.
    pub fn word_tokens(&self) -> &[Token] {
        match self.tokens.split_last() {
            Some((last, rest)) if last.is_aggregate() => rest,
            _ => &self.tokens,
        }
    }
}
