//! Convolution regression tests
//!
//! Exercises both the scalar and the lane-parallel entry points and checks
//! that they agree on every pixel.

use rasterkit_core::{Color, PixelBuffer};
use rasterkit_filter::{Kernel, apply_kernel, apply_kernel_vec};
use rasterkit_test::{buffers_equal, checkerboard, flat, gradient};

#[test]
fn identity_kernel_reproduces_flat_source() {
    let src = flat(8, 6, Color::new(12, 34, 56, 78));
    let kernel = Kernel::identity(3).unwrap();

    let mut scalar = PixelBuffer::new(8, 6).unwrap();
    apply_kernel(&src, &mut scalar, &kernel).unwrap();
    assert!(buffers_equal(&src, &scalar));

    let mut vector = PixelBuffer::new(8, 6).unwrap();
    apply_kernel_vec(&src, &mut vector, &kernel).unwrap();
    assert!(buffers_equal(&src, &vector));
}

#[test]
fn identity_kernel_reproduces_arbitrary_source() {
    let src = gradient(9, 7);
    for side in [1u8, 3, 5] {
        let kernel = Kernel::identity(side).unwrap();
        let mut dst = PixelBuffer::new(9, 7).unwrap();
        apply_kernel(&src, &mut dst, &kernel).unwrap();
        assert!(buffers_equal(&src, &dst), "side {}", side);
    }
}

#[test]
fn box_blur_center_is_truncated_average() {
    // 3x3 checkerboard: corners and center at 32, the rest at 220
    let src = checkerboard(
        3,
        3,
        1,
        Color::opaque(32, 32, 32),
        Color::opaque(220, 220, 220),
    );
    let kernel = Kernel::box_blur(3).unwrap();

    let mut dst = PixelBuffer::new(3, 3).unwrap();
    apply_kernel(&src, &mut dst, &kernel).unwrap();

    // center = trunc((5 * 32 + 4 * 220) / 9) = trunc(1040 / 9) = 115
    let center = dst.pixel(1, 1).unwrap();
    assert_eq!((center.r, center.g, center.b), (115, 115, 115));
    assert_eq!(center.a, 255);

    let mut vector = PixelBuffer::new(3, 3).unwrap();
    apply_kernel_vec(&src, &mut vector, &kernel).unwrap();
    assert_eq!(vector.pixel(1, 1), dst.pixel(1, 1));
}

#[test]
fn scalar_and_vector_agree_everywhere() {
    let src = gradient(13, 9);
    let kernels = [
        Kernel::identity(3).unwrap(),
        Kernel::box_blur(3).unwrap(),
        Kernel::box_blur(5).unwrap(),
        Kernel::gaussian(5).unwrap(),
        Kernel::sobel_horizontal().unwrap(),
        Kernel::laplacian().unwrap(),
        Kernel::sharpen().unwrap(),
    ];

    for kernel in &kernels {
        let mut scalar = PixelBuffer::new(13, 9).unwrap();
        let mut vector = PixelBuffer::new(13, 9).unwrap();
        apply_kernel(&src, &mut scalar, kernel).unwrap();
        apply_kernel_vec(&src, &mut vector, kernel).unwrap();
        assert!(
            buffers_equal(&scalar, &vector),
            "divergence for side {} multiplier {}",
            kernel.side(),
            kernel.multiplier()
        );
    }
}

#[test]
fn gradient_kernels_zero_out_flat_input() {
    let src = flat(6, 6, Color::new(77, 88, 99, 123));
    for kernel in [
        Kernel::sobel_horizontal().unwrap(),
        Kernel::sobel_vertical().unwrap(),
        Kernel::laplacian().unwrap(),
    ] {
        let mut dst = PixelBuffer::new(6, 6).unwrap();
        apply_kernel(&src, &mut dst, &kernel).unwrap();
        for px in dst.pixels() {
            assert_eq!((px.r, px.g, px.b), (0, 0, 0));
            assert_eq!(px.a, 123);
        }
    }
}

#[test]
fn negative_sums_clamp_to_zero() {
    // a kernel that negates the single source sample
    let mut kernel = Kernel::new(1).unwrap();
    kernel.load(1.0, &[-1]).unwrap();

    let src = flat(3, 3, Color::opaque(50, 150, 250));
    let mut dst = PixelBuffer::new(3, 3).unwrap();
    apply_kernel(&src, &mut dst, &kernel).unwrap();
    assert!(dst.pixels().iter().all(|&c| c == Color::opaque(0, 0, 0)));

    let mut vector = PixelBuffer::new(3, 3).unwrap();
    apply_kernel_vec(&src, &mut vector, &kernel).unwrap();
    assert!(buffers_equal(&dst, &vector));
}

#[test]
fn sharpen_overdrive_clamps_to_255() {
    let src = flat(5, 5, Color::opaque(200, 200, 200));
    let mut kernel = Kernel::new(3).unwrap();
    // weight sum 2 doubles a flat field: 400 clamps to 255
    kernel.load(1.0, &[0, 0, 0, 1, 1, 0, 0, 0, 0]).unwrap();

    let mut dst = PixelBuffer::new(5, 5).unwrap();
    apply_kernel(&src, &mut dst, &kernel).unwrap();
    assert!(dst.pixels().iter().all(|&c| c == Color::opaque(255, 255, 255)));
}

#[test]
fn border_pixels_replicate_edges() {
    // 1x3 vertical averaging kernel on a 2-row image: the top row's missing
    // neighbor above replicates the top row itself
    let mut src = PixelBuffer::new(1, 2).unwrap();
    src.set_pixel(0, 0, Color::opaque(30, 30, 30)).unwrap();
    src.set_pixel(0, 1, Color::opaque(90, 90, 90)).unwrap();

    let mut kernel = Kernel::new(3).unwrap();
    kernel.load(1.0 / 3.0, &[0, 1, 0, 0, 1, 0, 0, 1, 0]).unwrap();

    let mut dst = PixelBuffer::new(1, 2).unwrap();
    apply_kernel(&src, &mut dst, &kernel).unwrap();
    // top: (30 + 30 + 90) / 3 = 50, bottom: (30 + 90 + 90) / 3 = 70
    assert_eq!(dst.pixel(0, 0).unwrap().r, 50);
    assert_eq!(dst.pixel(0, 1).unwrap().r, 70);

    let mut vector = PixelBuffer::new(1, 2).unwrap();
    apply_kernel_vec(&src, &mut vector, &kernel).unwrap();
    assert!(buffers_equal(&dst, &vector));
}

#[test]
fn mismatched_buffers_are_rejected() {
    let src = gradient(4, 4);
    let mut dst = PixelBuffer::new(4, 3).unwrap();
    let kernel = Kernel::identity(3).unwrap();
    assert!(apply_kernel(&src, &mut dst, &kernel).is_err());
    assert!(apply_kernel_vec(&src, &mut dst, &kernel).is_err());
    assert!(dst.pixels().iter().all(|&c| c == Color::default()));
}
