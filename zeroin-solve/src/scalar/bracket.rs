use thiserror::Error;

/// Ways a search bracket can be malformed before any evaluation.
#[derive(Debug, Error)]
pub enum BracketError {
    #[error("bracket contains non-finite value: {value}")]
    NonFinite { value: f64 },

    #[error("bracket has zero width: left and right are both {value}")]
    ZeroWidth { value: f64 },
}

/// Validates bracket values and returns them in normalized (left < right) order.
pub(super) fn validate(bracket: [f64; 2]) -> Result<(f64, f64), BracketError> {
    let [left, right] = bracket;

    if !left.is_finite() {
        return Err(BracketError::NonFinite { value: left });
    }

    if !right.is_finite() {
        return Err(BracketError::NonFinite { value: right });
    }

    #[allow(clippy::float_cmp)]
    if left == right {
        return Err(BracketError::ZeroWidth { value: left });
    }

    if left < right {
        Ok((left, right))
    } else {
        Ok((right, left))
    }
}
