//! Histogram chart rendering
//!
//! Aggregates per-channel 256-bin histograms over a source buffer and draws
//! them as overlaid vertical bars into a fixed 256x100 chart buffer. Each
//! chart column x shows the bars for bin x of the red, green and blue
//! histograms in the matching output channels.

use crate::{FilterError, FilterResult, clamp_u8_i32};
use rasterkit_core::{Color, PixelBuffer};

/// Required chart width: one column per histogram bin.
pub const CHART_WIDTH: u16 = 256;

/// Required chart height in rows.
pub const CHART_HEIGHT: u16 = 100;

/// Count spanned by a full-height column: each of the 100 rows covers 256
/// intensity steps. Doubles as the sparse-histogram threshold.
const FULL_COLUMN: u32 = 256 * CHART_HEIGHT as u32;

/// Render the RGB histograms of `src` into the 256x100 chart `dst`.
///
/// The largest single bin count across the three histograms sets the scale.
/// Sparse histograms (max below a full column) are scaled x100 first so
/// they stay visible. Bars are drawn bottom-up; within a column each row
/// writes the remaining bar intensity clamped to [0, 255] and consumes 256
/// counts, so the bar tops off with a partial-intensity pixel. Every chart
/// pixel is fully opaque.
///
/// # Errors
///
/// Returns [`FilterError::BadChartSize`] without touching `dst` when `dst`
/// is not exactly 256x100.
pub fn histogram(src: &PixelBuffer, dst: &mut PixelBuffer) -> FilterResult<()> {
    if dst.width() != CHART_WIDTH || dst.height() != CHART_HEIGHT {
        return Err(FilterError::BadChartSize {
            width: dst.width(),
            height: dst.height(),
        });
    }

    let mut bins = [[0u32; 256]; 3];
    for px in src.pixels() {
        bins[0][px.r as usize] += 1;
        bins[1][px.g as usize] += 1;
        bins[2][px.b as usize] += 1;
    }

    let mut max = 0u32;
    for channel in &bins {
        for &count in channel {
            max = max.max(count);
        }
    }

    if max < FULL_COLUMN {
        max *= 100;
        for channel in bins.iter_mut() {
            for count in channel.iter_mut() {
                *count *= 100;
            }
        }
    }

    let mut div = max / FULL_COLUMN;
    if div < 10 {
        div += 1;
    }

    let width = CHART_WIDTH as usize;
    let height = CHART_HEIGHT as usize;
    let dp = dst.pixels_mut();

    for x in 0..width {
        let mut rv = (bins[0][x] / div) as i32;
        let mut gv = (bins[1][x] / div) as i32;
        let mut bv = (bins[2][x] / div) as i32;

        for y in 0..height {
            dp[x + (height - 1 - y) * width] = Color::new(
                clamp_u8_i32(rv),
                clamp_u8_i32(gv),
                clamp_u8_i32(bv),
                255,
            );
            rv -= 256;
            gv -= 256;
            bv -= 256;
        }
    }

    Ok(())
}
