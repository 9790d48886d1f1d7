//! Convolution kernels
//!
//! A [`Kernel`] is a square matrix of signed integer weights plus a floating
//! multiplier applied to each convolution sum. The side length must be odd
//! so the kernel has an exact center tap.
//!
//! Weights live in a 16-byte-aligned block with the same trailing-padding
//! rule as pixel data and start zeroed; callers populate them through
//! [`Kernel::load`], [`Kernel::set`], or one of the preset constructors.

use crate::{FilterError, FilterResult};
use rasterkit_core::AlignedBlock;

/// A square convolution kernel with integer weights and a float multiplier.
#[derive(Debug)]
pub struct Kernel {
    side: u8,
    multiplier: f32,
    block: AlignedBlock,
}

impl Kernel {
    /// Allocate a zeroed `side` x `side` kernel with multiplier 1.0.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::EvenKernelSide`] when `side` is even (which
    /// covers 0); the kernel has no center tap in that case.
    pub fn new(side: u8) -> FilterResult<Self> {
        if side % 2 == 0 {
            return Err(FilterError::EvenKernelSide(side));
        }
        let count = side as usize * side as usize;
        let block = AlignedBlock::new(count * 4)?;
        Ok(Kernel {
            side,
            multiplier: 1.0,
            block,
        })
    }

    /// Side length of the kernel.
    #[inline]
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Number of weights (`side` squared).
    #[inline]
    pub fn weight_count(&self) -> usize {
        self.side as usize * self.side as usize
    }

    /// The multiplier applied to every convolution sum.
    #[inline]
    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Set the multiplier.
    pub fn set_multiplier(&mut self, multiplier: f32) {
        self.multiplier = multiplier;
    }

    /// The weights in row-major order.
    #[inline]
    pub fn weights(&self) -> &[i32] {
        // SAFETY: the block base is 16-byte aligned and holds
        // weight_count() full i32 slots.
        unsafe {
            std::slice::from_raw_parts(self.block.as_slice().as_ptr().cast(), self.weight_count())
        }
    }

    /// Mutable view of the weights in row-major order.
    #[inline]
    pub fn weights_mut(&mut self) -> &mut [i32] {
        let count = self.weight_count();
        // SAFETY: as for weights().
        unsafe {
            std::slice::from_raw_parts_mut(self.block.as_mut_slice().as_mut_ptr().cast(), count)
        }
    }

    /// Read the weight at column `x`, row `y`, or `None` when out of range.
    #[inline]
    pub fn get(&self, x: u8, y: u8) -> Option<i32> {
        if x >= self.side || y >= self.side {
            return None;
        }
        Some(self.weights()[y as usize * self.side as usize + x as usize])
    }

    /// Set the weight at column `x`, row `y`.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] when the coordinates fall
    /// outside the kernel.
    pub fn set(&mut self, x: u8, y: u8, weight: i32) -> FilterResult<()> {
        if x >= self.side || y >= self.side {
            return Err(FilterError::InvalidKernel(format!(
                "weight ({x}, {y}) out of range for side {}",
                self.side
            )));
        }
        let side = self.side as usize;
        self.weights_mut()[y as usize * side + x as usize] = weight;
        Ok(())
    }

    /// Replace the multiplier and all weights at once.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] when `weights` does not hold
    /// exactly `side` squared values.
    pub fn load(&mut self, multiplier: f32, weights: &[i32]) -> FilterResult<()> {
        if weights.len() != self.weight_count() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for side {}, got {}",
                self.weight_count(),
                self.side,
                weights.len()
            )));
        }
        self.multiplier = multiplier;
        self.weights_mut().copy_from_slice(weights);
        Ok(())
    }

    /// An identity kernel: 1 at the center, multiplier 1.0.
    pub fn identity(side: u8) -> FilterResult<Self> {
        let mut kernel = Self::new(side)?;
        let mid = side / 2;
        kernel.set(mid, mid, 1)?;
        Ok(kernel)
    }

    /// A box (averaging) kernel: all ones, multiplier `1 / side²`.
    pub fn box_blur(side: u8) -> FilterResult<Self> {
        let mut kernel = Self::new(side)?;
        kernel.multiplier = 1.0 / (side as f32 * side as f32);
        kernel.weights_mut().fill(1);
        Ok(kernel)
    }

    /// A Gaussian blur kernel.
    ///
    /// Fixed integer approximations are provided for sides 3, 5 and 7.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for any other side.
    pub fn gaussian(side: u8) -> FilterResult<Self> {
        let (multiplier, weights): (f32, &[i32]) = match side {
            3 => (1.0 / 16.0, &[1, 2, 1, 2, 4, 2, 1, 2, 1]),
            5 => (
                1.0 / 273.0,
                &[
                    1, 4, 7, 4, 1, //
                    4, 16, 26, 16, 4, //
                    7, 26, 41, 26, 7, //
                    4, 16, 26, 16, 4, //
                    1, 4, 7, 4, 1,
                ],
            ),
            7 => (
                1.0 / 1003.0,
                &[
                    0, 0, 1, 2, 1, 0, 0, //
                    0, 3, 13, 22, 13, 3, 0, //
                    1, 13, 59, 97, 59, 13, 1, //
                    2, 22, 97, 159, 97, 22, 2, //
                    1, 13, 59, 97, 59, 13, 1, //
                    0, 3, 13, 22, 13, 3, 0, //
                    0, 0, 1, 2, 1, 0, 0,
                ],
            ),
            _ => {
                return Err(FilterError::InvalidKernel(format!(
                    "no gaussian table for side {side}"
                )));
            }
        };
        let mut kernel = Self::new(side)?;
        kernel.load(multiplier, weights)?;
        Ok(kernel)
    }

    /// A Sobel kernel for horizontal gradients.
    pub fn sobel_horizontal() -> FilterResult<Self> {
        let mut kernel = Self::new(3)?;
        kernel.load(1.0, &[1, 0, -1, 2, 0, -2, 1, 0, -1])?;
        Ok(kernel)
    }

    /// A Sobel kernel for vertical gradients.
    pub fn sobel_vertical() -> FilterResult<Self> {
        let mut kernel = Self::new(3)?;
        kernel.load(1.0, &[1, 2, 1, 0, 0, 0, -1, -2, -1])?;
        Ok(kernel)
    }

    /// A Laplacian edge-detection kernel.
    pub fn laplacian() -> FilterResult<Self> {
        let mut kernel = Self::new(3)?;
        kernel.load(1.0, &[-1, -1, -1, -1, 8, -1, -1, -1, -1])?;
        Ok(kernel)
    }

    /// An unsharp-mask sharpening kernel.
    pub fn sharpen() -> FilterResult<Self> {
        let mut kernel = Self::new(3)?;
        kernel.load(1.0, &[-1, -1, -1, -1, 9, -1, -1, -1, -1])?;
        Ok(kernel)
    }

    /// Write the kernel's side, multiplier and weight rows to a writer
    /// (for debugging).
    pub fn print(&self, writer: &mut impl std::io::Write) -> FilterResult<()> {
        let side = self.side as usize;
        writeln!(
            writer,
            "kernel ({side} x {side}), multiplier {:.3}",
            self.multiplier
        )
        .map_err(rasterkit_core::Error::from)?;
        for row in self.weights().chunks(side) {
            let line: Vec<String> = row.iter().map(|w| w.to_string()).collect();
            writeln!(writer, "  {}", line.join(", ")).map_err(rasterkit_core::Error::from)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_side_fails() {
        assert!(matches!(Kernel::new(0), Err(FilterError::EvenKernelSide(0))));
        assert!(matches!(Kernel::new(2), Err(FilterError::EvenKernelSide(2))));
        assert!(matches!(Kernel::new(4), Err(FilterError::EvenKernelSide(4))));
        assert!(Kernel::new(1).is_ok());
        assert!(Kernel::new(9).is_ok());
    }

    #[test]
    fn test_new_kernel_is_zeroed() {
        let kernel = Kernel::new(5).unwrap();
        assert_eq!(kernel.side(), 5);
        assert_eq!(kernel.weight_count(), 25);
        assert_eq!(kernel.multiplier(), 1.0);
        assert!(kernel.weights().iter().all(|&w| w == 0));
    }

    #[test]
    fn test_get_set() {
        let mut kernel = Kernel::new(3).unwrap();
        kernel.set(1, 2, -7).unwrap();
        assert_eq!(kernel.get(1, 2), Some(-7));
        assert_eq!(kernel.weights()[2 * 3 + 1], -7);
        assert_eq!(kernel.get(3, 0), None);
        assert!(kernel.set(0, 3, 1).is_err());
    }

    #[test]
    fn test_load_length_check() {
        let mut kernel = Kernel::new(3).unwrap();
        assert!(kernel.load(1.0, &[1, 2, 3]).is_err());
        kernel.load(0.5, &[1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(kernel.multiplier(), 0.5);
        assert_eq!(kernel.weights(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_presets() {
        let identity = Kernel::identity(3).unwrap();
        assert_eq!(identity.weights(), &[0, 0, 0, 0, 1, 0, 0, 0, 0]);

        let box3 = Kernel::box_blur(3).unwrap();
        assert!(box3.weights().iter().all(|&w| w == 1));
        assert!((box3.multiplier() - 1.0 / 9.0).abs() < 1e-6);

        let gauss = Kernel::gaussian(5).unwrap();
        assert_eq!(gauss.get(2, 2), Some(41));
        assert!(Kernel::gaussian(9).is_err());

        // gradient kernels sum to zero
        assert_eq!(Kernel::sobel_horizontal().unwrap().weights().iter().sum::<i32>(), 0);
        assert_eq!(Kernel::sobel_vertical().unwrap().weights().iter().sum::<i32>(), 0);
        assert_eq!(Kernel::laplacian().unwrap().weights().iter().sum::<i32>(), 0);
        assert_eq!(Kernel::sharpen().unwrap().weights().iter().sum::<i32>(), 1);
    }

    #[test]
    fn test_print() {
        let kernel = Kernel::sobel_horizontal().unwrap();
        let mut out = Vec::new();
        kernel.print(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("3 x 3"));
        assert!(text.contains("2, 0, -2"));
    }
}
