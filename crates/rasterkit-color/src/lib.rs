//! rasterkit-color - Color space conversion
//!
//! Pure RGB <-> HSV value conversions used by the HSV-adjust filter.
//! Every function here is total; there is no error type.

mod colorspace;

pub use colorspace::{Hsv, Rgb, hsv_to_rgb, rgb_to_hsv};
