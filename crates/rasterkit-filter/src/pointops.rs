//! Pointwise pixel filters: invert, grayscale, threshold
//!
//! Each filter reads every pixel of `src` and writes the identically-indexed
//! pixel of `dst`. Alpha is carried over unchanged.

use crate::{FilterResult, check_compatible};
use rasterkit_core::{Color, PixelBuffer, VEC_BYTES};

/// Invert the R, G and B channels: `dst.c = 255 - src.c`.
///
/// Applying the filter twice reproduces the original image.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn invert(src: &PixelBuffer, dst: &mut PixelBuffer) -> FilterResult<()> {
    check_compatible(src, dst)?;
    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        *d = Color::new(255 - s.r, 255 - s.g, 255 - s.b, s.a);
    }
    Ok(())
}

/// Word-parallel invert.
///
/// Inverting a channel is a bitwise NOT, so a whole pixel inverts by XORing
/// its packed word with `0x00FF_FFFF` (alpha byte untouched). The loop runs
/// one vector unit at a time over the padded region, so the final partial
/// step lands in the trailing slack instead of past the allocation.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn invert_vec(src: &PixelBuffer, dst: &mut PixelBuffer) -> FilterResult<()> {
    check_compatible(src, dst)?;

    const MASK: u32 = 0x00FF_FFFF;
    let words = (src.data_len() / VEC_BYTES + 1) * (VEC_BYTES / 4);
    let s = &src.padded_words()[..words];
    let d = &mut dst.padded_words_mut()[..words];
    for (d, s) in d.iter_mut().zip(s) {
        *d = s ^ MASK;
    }
    Ok(())
}

/// ITU-R BT.709 luma weights.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Convert to grayscale: R, G and B all receive the rounded luma.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn grayscale(src: &PixelBuffer, dst: &mut PixelBuffer) -> FilterResult<()> {
    check_compatible(src, dst)?;
    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        let luma = LUMA_R * s.r as f32 + LUMA_G * s.g as f32 + LUMA_B * s.b as f32;
        let y = (luma + 0.5).min(255.0) as u8;
        *d = Color::new(y, y, y, s.a);
    }
    Ok(())
}

/// Binarize each channel independently: 255 where the channel exceeds
/// `value`, 0 otherwise. This is a per-channel comparison, not a luminance
/// test.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn threshold(src: &PixelBuffer, dst: &mut PixelBuffer, value: u8) -> FilterResult<()> {
    check_compatible(src, dst)?;
    let step = |c: u8| if c > value { 255 } else { 0 };
    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        *d = Color::new(step(s.r), step(s.g), step(s.b), s.a);
    }
    Ok(())
}
