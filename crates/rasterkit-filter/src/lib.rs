//! rasterkit-filter - Image filtering operations
//!
//! This crate provides the filtering engine of rasterkit:
//!
//! - Pointwise transforms (invert, grayscale, threshold)
//! - Tone and color enhancement (gamma, brightness, HSV adjustment)
//! - Degradation effects (bitcrush, noise, pixelate)
//! - Convolution with arbitrary odd-sided integer kernels, scalar and
//!   lane-parallel
//! - Histogram chart rendering
//!
//! Every filter reads a source buffer and writes a destination buffer of
//! the same dimensions; the compatibility check runs before any pixel is
//! touched and a failed precondition leaves the destination unmodified.

pub mod convolve;
pub mod degrade;
pub mod enhance;
mod error;
pub mod histogram;
pub mod kernel;
pub mod pointops;

pub use error::{FilterError, FilterResult};
pub use kernel::Kernel;

// Re-export the operation set
pub use convolve::{apply_kernel, apply_kernel_vec};
pub use degrade::{bitcrush, noise, pixelate};
pub use enhance::{GammaLut, brightness, gamma, gamma_lut, hsv_adjust};
pub use histogram::{CHART_HEIGHT, CHART_WIDTH, histogram};
pub use pointops::{grayscale, invert, invert_vec, threshold};

use rasterkit_core::PixelBuffer;

/// The universal two-buffer precondition: exact width and height match.
pub(crate) fn check_compatible(src: &PixelBuffer, dst: &PixelBuffer) -> FilterResult<()> {
    if !src.compatible(dst) {
        return Err(FilterError::Core(rasterkit_core::Error::IncompatibleSizes(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        )));
    }
    Ok(())
}

/// Clamp to [0, 255] and truncate toward zero.
#[inline]
pub(crate) fn clamp_u8_f32(value: f32) -> u8 {
    if value < 0.0 {
        0
    } else if value > 255.0 {
        255
    } else {
        value as u8
    }
}

/// Clamp to [0, 255].
#[inline]
pub(crate) fn clamp_u8_i32(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
