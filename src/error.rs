//! Host-boundary errors.
//!
//! The shading pipeline is total and never fails; these only describe
//! frames the host handed over in a state the pipeline must not see.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FrameError {
    #[error("frame parameter buffer too short: expected {expected} values, got {got}")]
    ShortParams { expected: usize, got: usize },

    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("elapsed time must be finite and non-negative, got {0}")]
    InvalidTime(f64),

    #[error("pointer position must be finite, got ({x}, {y})")]
    InvalidPointer { x: f64, y: f64 },

    #[error("viewport {width}x{height} is too large to address as an RGBA buffer")]
    ViewportTooLarge { width: f64, height: f64 },

    #[error("RGBA buffer holds {got} bytes but the viewport needs {needed}")]
    BufferTooSmall { needed: usize, got: usize },
}
