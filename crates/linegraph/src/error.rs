//! Configuration errors.

use linegraph_core::ColorError;

/// Errors raised while validating a [`GraphConfig`](crate::GraphConfig).
///
/// Only configuration can fail. Per-frame geometry never returns an error;
/// it degrades to empty paths or missing values instead.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),

    #[error("smoothing must be within [0, 1], got {0}")]
    InvalidSmoothing(f64),

    #[error("pixel stride must be a finite number of at least 0.1 px, got {0}")]
    InvalidPixelStride(f64),

    #[error("line thickness must be a non-negative finite number, got {0}")]
    InvalidLineThickness(f64),

    #[error("padding must be non-negative and finite, got horizontal {horizontal} and vertical {vertical}")]
    InvalidPadding { horizontal: f64, vertical: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;
