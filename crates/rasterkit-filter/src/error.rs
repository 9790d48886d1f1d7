//! Error types for rasterkit-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] rasterkit_core::Error),

    /// Kernel allocation with an even side length
    #[error("kernel side must be odd, got {0}")]
    EvenKernelSide(u8),

    /// Invalid kernel contents or shape
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Invalid scalar parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Histogram destination does not match the fixed chart size
    #[error("histogram chart must be 256x100, got {width}x{height}")]
    BadChartSize { width: u16, height: u16 },
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
