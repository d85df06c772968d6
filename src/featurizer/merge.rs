//! Column-wise composition of dense feature matrices.

use crate::error::{Result, SpellfeatError};
use ndarray::{Array2, Axis, concatenate};

/// Append `new` after the columns of `existing`.
///
/// Row counts must agree. Without an existing matrix the result is `new`.
pub fn combine_dense(
    attribute: &str,
    existing: Option<&Array2<f32>>,
    new: Array2<f32>,
) -> Result<Array2<f32>> {
    let Some(existing) = existing else {
        return Ok(new);
    };

    if existing.nrows() != new.nrows() {
        return Err(SpellfeatError::FeatureShape {
            attribute: attribute.to_string(),
            expected: new.nrows(),
            actual: existing.nrows(),
        });
    }

    concatenate(Axis(1), &[existing.view(), new.view()])
        .map_err(|e| SpellfeatError::Other(format!("Failed to merge features: {}", e)))
}
