//! Dense featurizers.

pub mod correction_featurizer;
pub mod merge;

pub use correction_featurizer::{CONFIDENCE, CORRECTION_MADE, CorrectionFeaturizer, FEATURE_COLUMNS};
pub use merge::combine_dense;
