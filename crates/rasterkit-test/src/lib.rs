//! rasterkit-test - Test support
//!
//! Synthetic pixel buffer builders and comparison helpers shared by the
//! regression tests. Everything is generated in memory; the library has no
//! image file I/O.

use rasterkit_core::{Color, PixelBuffer};

/// A buffer filled with a single color.
///
/// # Panics
///
/// Panics on zero dimensions (test helper).
pub fn flat(width: u16, height: u16, color: Color) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height).expect("flat buffer");
    buf.fill(color);
    buf
}

/// A high-contrast checkerboard with `cell` x `cell` squares alternating
/// between `even` and `odd`.
///
/// # Panics
///
/// Panics on zero dimensions or a zero cell size (test helper).
pub fn checkerboard(width: u16, height: u16, cell: u16, even: Color, odd: Color) -> PixelBuffer {
    assert!(cell > 0, "cell size must be positive");
    let mut buf = PixelBuffer::new(width, height).expect("checkerboard buffer");
    let w = width as usize;
    let cell = cell as usize;
    for (i, px) in buf.pixels_mut().iter_mut().enumerate() {
        let (x, y) = (i % w, i / w);
        *px = if (x / cell + y / cell) % 2 == 0 {
            even
        } else {
            odd
        };
    }
    buf
}

/// A deterministic buffer where every channel varies with position:
/// useful when a test needs distinct values in every pixel and channel.
///
/// # Panics
///
/// Panics on zero dimensions (test helper).
pub fn gradient(width: u16, height: u16) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height).expect("gradient buffer");
    let w = width as usize;
    for (i, px) in buf.pixels_mut().iter_mut().enumerate() {
        let (x, y) = (i % w, i / w);
        *px = Color::new(
            (x * 31) as u8,
            (y * 17) as u8,
            (x + y * 7) as u8,
            (255 - (i % 96)) as u8,
        );
    }
    buf
}

/// Largest absolute per-channel difference between two buffers, alpha
/// included.
///
/// # Panics
///
/// Panics when the buffers have different dimensions (test helper).
pub fn max_channel_diff(a: &PixelBuffer, b: &PixelBuffer) -> u8 {
    assert!(a.compatible(b), "buffers must have matching dimensions");
    let mut max = 0u8;
    for (pa, pb) in a.pixels().iter().zip(b.pixels()) {
        for (ca, cb) in [
            (pa.r, pb.r),
            (pa.g, pb.g),
            (pa.b, pb.b),
            (pa.a, pb.a),
        ] {
            max = max.max(ca.abs_diff(cb));
        }
    }
    max
}

/// Whether two buffers hold bit-identical pixel data.
pub fn buffers_equal(a: &PixelBuffer, b: &PixelBuffer) -> bool {
    a.compatible(b) && a.bytes() == b.bytes()
}
