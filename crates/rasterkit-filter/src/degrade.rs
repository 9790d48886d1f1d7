//! Degradation effects: bitcrush, noise, pixelate

use crate::{FilterResult, check_compatible, clamp_u8_i32};
use rand::{RngExt, SeedableRng, rngs::StdRng};
use rasterkit_core::{Color, PixelBuffer};

/// Quantize each channel to `2^(8 - crush)` levels.
///
/// `crush` is silently capped to 7. Each channel is truncated to a multiple
/// of `2^crush`; every bucket except the lowest is then filled to its top by
/// forcing the low `crush` bits to 1. The lowest bucket stays at 0. The
/// asymmetry (dark pixels snap down, everything else snaps up) is the
/// defining look of the effect.
///
/// `crush = 0` is the identity.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn bitcrush(src: &PixelBuffer, dst: &mut PixelBuffer, crush: u8) -> FilterResult<()> {
    check_compatible(src, dst)?;

    let crush = crush.min(7);
    let comp = 1u8 << crush;
    let fill = !(0xFFu8 << crush);

    let crushed = |c: u8| {
        let mut q = (c >> crush) << crush;
        if q >= comp {
            q |= fill;
        }
        q
    };

    for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
        *d = Color::new(crushed(s.r), crushed(s.g), crushed(s.b), s.a);
    }
    Ok(())
}

/// Add seeded pseudo-random noise in `[-amount/2, amount/2)` to each pixel.
///
/// The generator is instantiated locally from `seed`, so equal seeds give
/// equal output and no state leaks between calls. With `shared_channels`
/// one value is drawn per pixel and applied to R, G and B alike (luminance
/// noise); otherwise each channel draws independently (color noise).
/// Channels are clamped to [0, 255]; alpha is carried over.
///
/// `amount = 0` copies the source unchanged, whatever the seed.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn noise(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    amount: u8,
    shared_channels: bool,
    seed: u32,
) -> FilterResult<()> {
    check_compatible(src, dst)?;

    if amount == 0 {
        dst.bytes_mut().copy_from_slice(src.bytes());
        return Ok(());
    }

    let mut rng = StdRng::seed_from_u64(seed as u64);
    let span = amount as i32;
    let offset = span / 2;

    if shared_channels {
        for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
            let n = rng.random_range(0..span) - offset;
            *d = Color::new(
                clamp_u8_i32(s.r as i32 + n),
                clamp_u8_i32(s.g as i32 + n),
                clamp_u8_i32(s.b as i32 + n),
                s.a,
            );
        }
    } else {
        for (d, s) in dst.pixels_mut().iter_mut().zip(src.pixels()) {
            *d = Color::new(
                clamp_u8_i32(s.r as i32 + rng.random_range(0..span) - offset),
                clamp_u8_i32(s.g as i32 + rng.random_range(0..span) - offset),
                clamp_u8_i32(s.b as i32 + rng.random_range(0..span) - offset),
                s.a,
            );
        }
    }
    Ok(())
}

/// Replace each `block_size` x `block_size` block with its mean color.
///
/// Blocks are clipped at the right and bottom edges; a clipped block
/// averages only the pixels it actually contains. The mean is the
/// integer-truncated per-channel average over R, G, B and A.
///
/// `block_size` is silently raised to at least 1; `block_size = 1` is the
/// identity.
///
/// # Errors
///
/// Fails without touching `dst` when the buffers are not the same size.
pub fn pixelate(src: &PixelBuffer, dst: &mut PixelBuffer, block_size: u8) -> FilterResult<()> {
    check_compatible(src, dst)?;

    let step = block_size.max(1) as usize;
    let w = src.width() as usize;
    let h = src.height() as usize;
    let sp = src.pixels();
    let dp = dst.pixels_mut();

    let mut ly = 0;
    while ly < h {
        let uy = (ly + step).min(h);
        let mut lx = 0;
        while lx < w {
            let ux = (lx + step).min(w);
            let count = ((ux - lx) * (uy - ly)) as u32;

            let (mut r, mut g, mut b, mut a) = (0u32, 0u32, 0u32, 0u32);
            for y in ly..uy {
                for x in lx..ux {
                    let px = sp[y * w + x];
                    r += px.r as u32;
                    g += px.g as u32;
                    b += px.b as u32;
                    a += px.a as u32;
                }
            }

            let mean = Color::new(
                (r / count) as u8,
                (g / count) as u8,
                (b / count) as u8,
                (a / count) as u8,
            );
            for y in ly..uy {
                for x in lx..ux {
                    dp[y * w + x] = mean;
                }
            }
            lx = ux;
        }
        ly = uy;
    }
    Ok(())
}
