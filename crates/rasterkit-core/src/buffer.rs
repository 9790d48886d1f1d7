//! The RGBA pixel buffer
//!
//! [`PixelBuffer`] is the fundamental image container. Its memory layout is
//! fixed and host-visible:
//!
//! - a 4-byte header: `width` then `height` as little-endian `u16`,
//!   no interior padding;
//! - immediately after it, `width * height` pixels in row-major order,
//!   4 bytes per pixel in R,G,B,A byte order.
//!
//! The whole thing lives in one [`AlignedBlock`], so the total allocation is
//! `round_up(4 + width * height * 4, 16) + 16` bytes and vector-width
//! operations may run past the logical pixel data into the trailing slack.
//!
//! # Ownership model
//!
//! A `PixelBuffer` is a single-owner handle: the backing memory is released
//! when the buffer drops, including on early-return and error paths. Filters
//! never allocate, resize, or free buffers; they only read `src` and write
//! `dst`.

use crate::alloc::AlignedBlock;
use crate::color::Color;
use crate::error::{Error, Result};

/// Size of the width/height header preceding the pixel data.
pub const HEADER_BYTES: usize = 4;

/// An owned RGBA image buffer with a fixed binary layout.
#[derive(Debug)]
pub struct PixelBuffer {
    block: AlignedBlock,
    width: u16,
    height: u16,
}

impl PixelBuffer {
    /// Allocate a buffer for a `width` x `height` image.
    ///
    /// Pixel contents start zeroed; callers fill them through the mutable
    /// views.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is 0, and
    /// [`Error::AllocationFailed`] if the memory request cannot be
    /// satisfied.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let data_len = width as usize * height as usize * 4;
        let mut block = AlignedBlock::new(HEADER_BYTES + data_len)?;

        let header = block.as_mut_slice();
        header[0..2].copy_from_slice(&width.to_le_bytes());
        header[2..4].copy_from_slice(&height.to_le_bytes());

        Ok(PixelBuffer {
            block,
            width,
            height,
        })
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Number of pixels in the buffer.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Length of the logical pixel data in bytes.
    #[inline]
    pub fn data_len(&self) -> usize {
        self.pixel_count() * 4
    }

    /// Whether `other` has exactly the same width and height.
    ///
    /// This is the single precondition every two-buffer operation checks
    /// before touching any pixel.
    #[inline]
    pub fn compatible(&self, other: &PixelBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// The logical pixel data as raw bytes.
    #[inline]
    pub fn bytes(&self) -> &[u8] {
        &self.block.as_slice()[HEADER_BYTES..HEADER_BYTES + self.data_len()]
    }

    /// Mutable view of the logical pixel data as raw bytes.
    #[inline]
    pub fn bytes_mut(&mut self) -> &mut [u8] {
        let len = self.data_len();
        &mut self.block.as_mut_slice()[HEADER_BYTES..HEADER_BYTES + len]
    }

    /// Pixel data plus the trailing slack, for vector-width passes that
    /// overrun the logical data.
    #[inline]
    pub fn padded_bytes(&self) -> &[u8] {
        &self.block.as_slice()[HEADER_BYTES..]
    }

    /// Mutable pixel data plus the trailing slack.
    #[inline]
    pub fn padded_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.block.as_mut_slice()[HEADER_BYTES..]
    }

    /// The logical pixels as packed little-endian words.
    #[inline]
    pub fn words(&self) -> &[u32] {
        let bytes = self.bytes();
        // SAFETY: the pixel region starts 4 bytes past a 16-byte-aligned
        // base, so it is u32-aligned, and it holds pixel_count() full words.
        unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast(), self.pixel_count()) }
    }

    /// Mutable packed-word view of the logical pixels.
    #[inline]
    pub fn words_mut(&mut self) -> &mut [u32] {
        let count = self.pixel_count();
        let bytes = self.bytes_mut();
        // SAFETY: as for words().
        unsafe { std::slice::from_raw_parts_mut(bytes.as_mut_ptr().cast(), count) }
    }

    /// Packed words over the pixel data and the trailing slack.
    #[inline]
    pub fn padded_words(&self) -> &[u32] {
        let bytes = self.padded_bytes();
        // SAFETY: region is u32-aligned and its length is a multiple of 4.
        unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast(), bytes.len() / 4) }
    }

    /// Mutable packed words over the pixel data and the trailing slack.
    #[inline]
    pub fn padded_words_mut(&mut self) -> &mut [u32] {
        let bytes = self.padded_bytes_mut();
        let len = bytes.len() / 4;
        // SAFETY: as for padded_words().
        unsafe { std::slice::from_raw_parts_mut(bytes.as_mut_ptr().cast(), len) }
    }

    /// The logical pixels as typed colors.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        let bytes = self.bytes();
        // SAFETY: Color is #[repr(C)], 4 bytes, align 1, any bit pattern
        // valid.
        unsafe { std::slice::from_raw_parts(bytes.as_ptr().cast(), self.pixel_count()) }
    }

    /// Mutable typed-color view of the logical pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        let count = self.pixel_count();
        let bytes = self.bytes_mut();
        // SAFETY: as for pixels().
        unsafe { std::slice::from_raw_parts_mut(bytes.as_mut_ptr().cast(), count) }
    }

    /// Read one pixel, or `None` when the coordinates are out of range.
    #[inline]
    pub fn pixel(&self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels()[y as usize * self.width as usize + x as usize])
    }

    /// Write one pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] when the coordinates are out of range.
    pub fn set_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let w = self.width as usize;
        self.pixels_mut()[y as usize * w + x as usize] = color;
        Ok(())
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let word = color.to_word();
        self.words_mut().fill(word);
    }

    /// Write one pixel's channel values to a writer (for debugging).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the buffer.
    pub fn print_pixel(&self, writer: &mut impl std::io::Write, x: u16, y: u16) -> Result<()> {
        let Some(c) = self.pixel(x, y) else {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        };
        writeln!(
            writer,
            "pixel ({}, {}) = #{:02X}{:02X}{:02X} (alpha {})",
            x, y, c.r, c.g, c.b, c.a
        )?;
        Ok(())
    }
}
