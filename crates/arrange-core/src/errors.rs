//! Error types for the Arrange engine.
//!
//! Layout itself never fails. These errors are produced only by the checked
//! entry points, which reject NaN inputs before a pass starts and verify the
//! shape of its results.

use thiserror::Error;

/// Errors reported by checked layout entry points.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("{context} contains NaN")]
    NotANumber { context: &'static str },

    #[error("Layout produced {found} frames for {expected} items")]
    FrameCountMismatch { expected: usize, found: usize },
}

/// Returns an error naming `context` if any of `values` is NaN.
pub(crate) fn ensure_numbers(context: &'static str, values: &[f64]) -> Result<(), LayoutError> {
    if values.iter().any(|value| value.is_nan()) {
        Err(LayoutError::NotANumber { context })
    } else {
        Ok(())
    }
}
