//! Tests for viewport construction and pixel-to-native mapping.

use makan_core::{MapExtent, Viewport, distance, midpoint, pixel_to_map};

// === Viewport construction ===

#[test]
fn test_scaled_viewport_floors_to_whole_pixels() {
    let viewport = Viewport::scaled(MapExtent::default(), 0.9).unwrap();
    // floor(1281 * 0.9) = 1152, floor(1550 * 0.9) = 1395
    assert_eq!(viewport.width(), 1152.0);
    assert_eq!(viewport.height(), 1395.0);
}

#[test]
fn test_scaled_viewport_rejects_degenerate_factors() {
    let extent = MapExtent::default();
    assert!(Viewport::scaled(extent, 0.0).is_err());
    assert!(Viewport::scaled(extent, -0.5).is_err());
    // A factor so small the floored width collapses to zero.
    assert!(Viewport::scaled(extent, 0.0001).is_err());
}

// === Pixel mapping ===

#[test]
fn test_corners_map_to_extent_corners() {
    let extent = MapExtent {
        width: 1000.0,
        height: 800.0,
    };
    let viewport = Viewport::new(500.0, 400.0).unwrap();
    // The vertical axis flips: the viewport origin is bottom-left while
    // native coordinates count from the top.
    assert_eq!(pixel_to_map((0.0, 0.0), viewport, extent), (0, 800));
    assert_eq!(pixel_to_map((500.0, 0.0), viewport, extent), (1000, 800));
    assert_eq!(pixel_to_map((0.0, 400.0), viewport, extent), (0, 0));
    assert_eq!(pixel_to_map((500.0, 400.0), viewport, extent), (1000, 0));
}

#[test]
fn test_proportionally_equal_viewports_agree() {
    // The same relative click through two viewports with equal aspect
    // ratio must land on the same native coordinate.
    let extent = MapExtent {
        width: 1000.0,
        height: 800.0,
    };
    let full = Viewport::new(1000.0, 800.0).unwrap();
    let half = Viewport::scaled(extent, 0.5).unwrap();
    for (rx, ry) in [(0.0, 0.0), (0.25, 0.5), (0.5, 0.25), (1.0, 1.0)] {
        let on_full = pixel_to_map((rx * 1000.0, ry * 800.0), full, extent);
        let on_half = pixel_to_map((rx * 500.0, ry * 400.0), half, extent);
        assert_eq!(on_full, on_half, "relative click ({rx}, {ry})");
    }
}

#[test]
fn test_half_unit_rounds_away_from_zero() {
    // Upscaling 2x turns a .25 click into a .5 native coordinate.
    let extent = MapExtent {
        width: 200.0,
        height: 200.0,
    };
    let viewport = Viewport::new(100.0, 100.0).unwrap();
    let (x, _) = pixel_to_map((10.25, 0.0), viewport, extent);
    assert_eq!(x, 21);
}

// === Midpoint and distance ===

#[test]
fn test_identical_points_midpoint_is_that_point() {
    let p = (321.0, 87.0);
    assert_eq!(midpoint(p, p), p);
}

#[test]
fn test_midpoint_keeps_fractional_precision() {
    assert_eq!(midpoint((0.0, 0.0), (1.0, 3.0)), (0.5, 1.5));
}

#[test]
fn test_distance_is_symmetric() {
    let a = (100.0, 100.0);
    let b = (150.0, 500.0);
    assert_eq!(distance(a, b), distance(b, a));
    assert_eq!(distance(a, a), 0.0);
}
