//! Geometric types and coordinate mapping.
//!
//! Provides the plane geometry used by the nearest-canteen search:
//! - Point type aliases for viewport (pixel) and native map space
//! - Viewport/MapExtent types and the pixel-to-native mapping
//! - Midpoint and Euclidean distance helpers

use crate::error::{MakanError, Result};

/// A 2D point (x, y) in floating-point coordinates.
///
/// Used for raw viewport clicks and for derived values such as midpoints.
pub type Point = (f64, f64);

/// A point in the dataset's native coordinate space.
///
/// Canteen locations are recorded in this space, which is the pixel grid of
/// the reference campus map image.
pub type MapPoint = (i32, i32);

/// A user position, or `None` when the location was never captured.
///
/// The sentinel must be checked before the point takes part in any distance
/// computation; see [`crate::search::nearest_canteens`].
pub type UserPoint = Option<MapPoint>;

/// Dimensions of the native coordinate space.
///
/// The default matches the reference campus map image the dataset
/// coordinates were authored against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapExtent {
    pub width: f64,
    pub height: f64,
}

impl Default for MapExtent {
    fn default() -> Self {
        Self {
            width: 1281.0,
            height: 1550.0,
        }
    }
}

/// On-screen window dimensions used during coordinate capture.
///
/// Construction validates the dimensions, so a `Viewport` value is always a
/// safe divisor for [`pixel_to_map`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Creates a viewport, rejecting non-positive or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(MakanError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Creates the viewport a capture window opens at: the map extent scaled
    /// by `factor` and truncated to whole pixels.
    pub fn scaled(extent: MapExtent, factor: f64) -> Result<Self> {
        Self::new(
            (extent.width * factor).floor(),
            (extent.height * factor).floor(),
        )
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

/// Maps a raw viewport click to the native coordinate space.
///
/// `x` scales by the width ratio; `y` is measured from the top of the
/// viewport before scaling, because the viewport's origin is bottom-left
/// with y growing upward while native coordinates are interpreted from the
/// top. The flip is part of the contract, not an option. Components round
/// to the nearest integer.
///
/// Mapping the same relative click through two proportionally equal
/// viewports yields the same native coordinate.
pub fn pixel_to_map(click: Point, viewport: Viewport, extent: MapExtent) -> MapPoint {
    let (px, py) = click;
    let x = px * extent.width / viewport.width;
    let y = (viewport.height - py) * extent.height / viewport.height;
    (x.round() as i32, y.round() as i32)
}

/// Widens a native-space point for floating-point arithmetic.
#[inline]
pub fn to_point(p: MapPoint) -> Point {
    (p.0 as f64, p.1 as f64)
}

/// Per-axis arithmetic mean of two points, unrounded.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Planar Euclidean distance between two points.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = a.0 - b.0;
    let dy = a.1 - b.1;
    (dx * dx + dy * dy).sqrt()
}
