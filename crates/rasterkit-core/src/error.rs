//! Error types for rasterkit-core
//!
//! Provides a unified error type for buffer allocation and access.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u16, height: u16 },

    /// Incompatible buffer sizes
    #[error("incompatible buffer sizes: {0}x{1} vs {2}x{3}")]
    IncompatibleSizes(u16, u16, u16, u16),

    /// Pixel coordinates outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// Memory allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
