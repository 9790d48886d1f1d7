//! Tone and color enhancement: gamma, linear brightness, HSV adjustment

use crate::{FilterError, FilterResult, check_compatible, clamp_u8_f32};
use rasterkit_color::{Rgb, hsv_to_rgb, rgb_to_hsv};
use rasterkit_core::{Color, PixelBuffer};

/// A 256-entry lookup table mapping input channel values to output values.
pub type GammaLut = [u8; 256];

/// Build the gamma-correction lookup table.
///
/// `lut[i] = clamp(255 * (i / 255) ^ (1 / gamma) + 0.5)` with a truncating
/// final conversion, so the table rounds to nearest. `gamma = 1` yields the
/// identity table; the table is monotonically non-decreasing for any
/// positive gamma.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameter`] when `gamma <= 0`.
pub fn gamma_lut(gamma: f32) -> FilterResult<GammaLut> {
    if gamma <= 0.0 {
        return Err(FilterError::InvalidParameter(
            "gamma must be > 0.0".to_string(),
        ));
    }
    let inv_gamma = 1.0_f32 / gamma;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        *entry = clamp_u8_f32((i as f32 / 255.0).powf(inv_gamma) * 255.0 + 0.5);
    }
    Ok(lut)
}

/// Apply gamma correction to R, G and B through a lookup table.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size or
/// `gamma <= 0`.
pub fn gamma(src: &PixelBuffer, dst: &mut PixelBuffer, gamma: f32) -> FilterResult<()> {
    check_compatible(src, dst)?;
    let lut = gamma_lut(gamma)?;
    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        *d = Color::new(
            lut[s.r as usize],
            lut[s.g as usize],
            lut[s.b as usize],
            s.a,
        );
    }
    Ok(())
}

/// Scale R, G and B linearly by `multiplier`, clamping to [0, 255].
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn brightness(src: &PixelBuffer, dst: &mut PixelBuffer, multiplier: f32) -> FilterResult<()> {
    check_compatible(src, dst)?;
    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        *d = Color::new(
            clamp_u8_f32(multiplier * s.r as f32),
            clamp_u8_f32(multiplier * s.g as f32),
            clamp_u8_f32(multiplier * s.b as f32),
            s.a,
        );
    }
    Ok(())
}

/// Shift hue and scale saturation and value per pixel.
///
/// `hue_delta` is in degrees; a negative delta has 360 added once up front
/// so the per-pixel sum stays non-negative before the modulo wrap.
/// Saturation and value are multiplied by their factors without clamping in
/// HSV space; the final RGB channels are clamped to [0, 255].
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn hsv_adjust(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    hue_delta: f32,
    sat_mul: f32,
    val_mul: f32,
) -> FilterResult<()> {
    check_compatible(src, dst)?;

    let mut hue_delta = hue_delta;
    if hue_delta < 0.0 {
        hue_delta += 360.0;
    }

    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        let mut hsv = rgb_to_hsv(Rgb::new(
            s.r as f32 / 255.0,
            s.g as f32 / 255.0,
            s.b as f32 / 255.0,
        ));

        hsv.h = (hsv.h + hue_delta) % 360.0;
        hsv.s *= sat_mul;
        hsv.v *= val_mul;

        let rgb = hsv_to_rgb(hsv);
        *d = Color::new(
            clamp_u8_f32(rgb.r * 255.0),
            clamp_u8_f32(rgb.g * 255.0),
            clamp_u8_f32(rgb.b * 255.0),
            s.a,
        );
    }
    Ok(())
}
