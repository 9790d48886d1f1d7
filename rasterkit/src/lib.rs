//! Rasterkit - RGBA raster filtering library
//!
//! An image-processing engine that operates directly on raw RGBA pixel
//! buffers: pointwise color transforms, generic odd-sided kernel
//! convolution (scalar and lane-parallel), and a histogram chart renderer.
//!
//! The host application owns every buffer: it allocates a source, fills it,
//! allocates a matching destination, and invokes one synchronous operation
//! per call. Filters never allocate, resize, or free pixel buffers.
//!
//! # Example
//!
//! ```
//! use rasterkit::{Color, PixelBuffer};
//! use rasterkit::filter::invert;
//!
//! let mut src = PixelBuffer::new(4, 4).unwrap();
//! src.fill(Color::opaque(255, 255, 255));
//! let mut dst = PixelBuffer::new(4, 4).unwrap();
//!
//! invert(&src, &mut dst).unwrap();
//! assert_eq!(dst.pixel(0, 0), Some(Color::opaque(0, 0, 0)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use rasterkit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use rasterkit_color as color;
pub use rasterkit_filter as filter;
