//! Histogram chart regression tests

use rasterkit_core::{Color, PixelBuffer};
use rasterkit_filter::{CHART_HEIGHT, CHART_WIDTH, histogram};
use rasterkit_test::flat;

fn chart() -> PixelBuffer {
    PixelBuffer::new(CHART_WIDTH, CHART_HEIGHT).unwrap()
}

#[test]
fn wrong_chart_size_is_rejected() {
    let src = flat(8, 8, Color::opaque(0, 0, 0));
    for (w, h) in [(128u16, 100u16), (256, 99), (100, 256), (1, 1)] {
        let mut dst = flat(w, h, Color::opaque(9, 9, 9));
        assert!(histogram(&src, &mut dst).is_err(), "{}x{}", w, h);
        // failed validation must not touch the destination
        assert!(dst.pixels().iter().all(|&c| c == Color::opaque(9, 9, 9)));
    }
}

#[test]
fn all_black_source_peaks_in_column_zero() {
    let src = flat(16, 16, Color::opaque(0, 0, 0));
    let mut dst = chart();
    histogram(&src, &mut dst).unwrap();

    let bottom = CHART_HEIGHT - 1;

    // column 0 holds every count; its bar starts saturated at the bottom
    let c0 = dst.pixel(0, bottom).unwrap();
    assert_eq!((c0.r, c0.g, c0.b, c0.a), (255, 255, 255, 255));

    // 256 pixels scale x100 to 25600, divisor becomes 2: the bar spans
    // 12800 / 256 = 50 rows
    assert_eq!(dst.pixel(0, bottom - 49).unwrap().r, 255);
    assert_eq!(dst.pixel(0, bottom - 50).unwrap().r, 0);

    // empty bins render empty columns
    let c1 = dst.pixel(1, bottom).unwrap();
    assert_eq!((c1.r, c1.g, c1.b), (0, 0, 0));
    let c255 = dst.pixel(255, bottom).unwrap();
    assert_eq!((c255.r, c255.g, c255.b), (0, 0, 0));
}

#[test]
fn chart_is_fully_opaque() {
    let src = flat(32, 32, Color::opaque(3, 200, 90));
    let mut dst = chart();
    histogram(&src, &mut dst).unwrap();
    assert!(dst.pixels().iter().all(|&c| c.a == 255));
}

#[test]
fn channel_bars_land_in_their_own_columns() {
    let src = flat(16, 16, Color::opaque(10, 20, 30));
    let mut dst = chart();
    histogram(&src, &mut dst).unwrap();

    let bottom = CHART_HEIGHT - 1;

    // each channel's count sits in its own bin, in its own output channel
    let c10 = dst.pixel(10, bottom).unwrap();
    assert_eq!((c10.r, c10.g, c10.b), (255, 0, 0));
    let c20 = dst.pixel(20, bottom).unwrap();
    assert_eq!((c20.r, c20.g, c20.b), (0, 255, 0));
    let c30 = dst.pixel(30, bottom).unwrap();
    assert_eq!((c30.r, c30.g, c30.b), (0, 0, 255));
}

#[test]
fn dense_histograms_skip_the_sparse_scale() {
    // 600x600 flat image: max bin = 360000 >= 25600, so no x100 scaling;
    // div = 360000 / 25600 = 14, bar value 360000 / 14 = 25714 saturates
    // the full column
    let src = flat(600, 600, Color::opaque(128, 128, 128));
    let mut dst = chart();
    histogram(&src, &mut dst).unwrap();

    for y in 0..CHART_HEIGHT {
        let px = dst.pixel(128, y).unwrap();
        assert_eq!((px.r, px.g, px.b), (255, 255, 255), "row {}", y);
    }
}
