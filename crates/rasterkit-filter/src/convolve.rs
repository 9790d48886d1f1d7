//! Kernel convolution
//!
//! Applies a square [`Kernel`] to every pixel of a source buffer. For each
//! pixel and each of R, G, B the output is
//!
//! ```text
//! clamp_u8(multiplier * sum(weight[ky][kx] * src(x + kx - mid, y + ky - mid)))
//! ```
//!
//! with `mid = side / 2`. Neighbor coordinates are clamped independently to
//! the buffer edges, so border pixels replicate the nearest edge pixel.
//! Alpha is copied from the source pixel unchanged.
//!
//! Accumulation is pure 32-bit integer arithmetic; the multiplier is applied
//! in f32 with a truncating conversion, and only when it differs from 1.0.
//! The scalar and lane-parallel entry points produce identical output.

use crate::kernel::Kernel;
use crate::{FilterResult, check_compatible, clamp_u8_f32, clamp_u8_i32};
use rasterkit_core::{Color, PixelBuffer};

/// Convolve `src` with `kernel` into `dst`. Scalar reference path.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn apply_kernel(src: &PixelBuffer, dst: &mut PixelBuffer, kernel: &Kernel) -> FilterResult<()> {
    check_compatible(src, dst)?;

    let w = src.width() as i32;
    let h = src.height() as i32;
    let side = kernel.side() as i32;
    let mid = side / 2;
    let weights = kernel.weights();
    let multiplier = kernel.multiplier();

    let sp = src.pixels();
    let dp = dst.pixels_mut();

    for y in 0..h {
        for x in 0..w {
            let mut out = [0u8; 3];
            for (c, slot) in out.iter_mut().enumerate() {
                let mut sum: i32 = 0;
                for ky in 0..side {
                    let sy = (y + ky - mid).clamp(0, h - 1);
                    for kx in 0..side {
                        let sx = (x + kx - mid).clamp(0, w - 1);
                        let px = sp[(sy * w + sx) as usize];
                        let channel = match c {
                            0 => px.r,
                            1 => px.g,
                            _ => px.b,
                        };
                        sum += weights[(ky * side + kx) as usize] * channel as i32;
                    }
                }
                *slot = if multiplier != 1.0 {
                    clamp_u8_f32(sum as f32 * multiplier)
                } else {
                    clamp_u8_i32(sum)
                };
            }
            let center = (y * w + x) as usize;
            dp[center] = Color::new(out[0], out[1], out[2], sp[center].a);
        }
    }

    Ok(())
}

/// Convolve `src` with `kernel` into `dst`. Lane-parallel path.
///
/// Processes the four channel lanes of a pixel together: weights are
/// pre-broadcast into 4-lane groups (with the alpha lane held at 1 and its
/// result discarded), neighborhoods accumulate into four i32 lanes at once,
/// and the lanes are clamped and packed back into one word per pixel.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn apply_kernel_vec(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    kernel: &Kernel,
) -> FilterResult<()> {
    check_compatible(src, dst)?;

    let w = src.width() as i32;
    let h = src.height() as i32;
    let side = kernel.side() as i32;
    let mid = side / 2;
    let multiplier = kernel.multiplier();

    // scratch table: each weight broadcast to its 4-lane group
    let mut lanes = vec![0i32; kernel.weight_count() * 4];
    for (group, &weight) in lanes.chunks_exact_mut(4).zip(kernel.weights()) {
        group[0] = weight;
        group[1] = weight;
        group[2] = weight;
        group[3] = 1;
    }

    let sw = src.words();
    let dw = dst.words_mut();

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0i32; 4];
            for ky in 0..side {
                let sy = (y + ky - mid).clamp(0, h - 1);
                for kx in 0..side {
                    let sx = (x + kx - mid).clamp(0, w - 1);
                    let word = sw[(sy * w + sx) as usize];
                    let group = &lanes[((ky * side + kx) * 4) as usize..][..4];
                    sum[0] += group[0] * (word & 0xFF) as i32;
                    sum[1] += group[1] * ((word >> 8) & 0xFF) as i32;
                    sum[2] += group[2] * ((word >> 16) & 0xFF) as i32;
                    sum[3] += group[3] * (word >> 24) as i32;
                }
            }

            if multiplier != 1.0 {
                for lane in &mut sum {
                    // saturating truncation, like a vector float-to-int pack
                    *lane = (*lane as f32 * multiplier) as i32;
                }
            }

            let center = (y * w + x) as usize;
            let alpha = sw[center] >> 24;
            dw[center] = sum[0].clamp(0, 255) as u32
                | ((sum[1].clamp(0, 255) as u32) << 8)
                | ((sum[2].clamp(0, 255) as u32) << 16)
                | (alpha << 24);
        }
    }

    Ok(())
}
