//! Tile coordinate rectangles and extent coverage.

use serde::Serialize;
use tilejson::Bounds;

use crate::{MAX_MERCATOR_LATITUDE, tile_index, wgs84_to_webmercator};

/// A rectangular region in tile coordinate space.
///
/// The rectangle is inclusive of both min and max coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// The zoom level of the tiles
    pub zoom: u8,
    /// The minimum X coordinate (inclusive)
    pub min_x: u32,
    /// The minimum Y coordinate (inclusive)
    pub min_y: u32,
    /// The maximum X coordinate (inclusive)
    pub max_x: u32,
    /// The maximum Y coordinate (inclusive)
    pub max_y: u32,
}

impl Serialize for TileRect {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.collect_str(&format!(
            "{}: ({},{}) - ({},{})",
            self.zoom, self.min_x, self.min_y, self.max_x, self.max_y
        ))
    }
}

impl TileRect {
    /// Creates a new `TileRect`.
    ///
    /// # Panics
    ///
    /// Panics if `min_x > max_x` or `min_y > max_y`.
    #[must_use]
    pub fn new(zoom: u8, min_x: u32, min_y: u32, max_x: u32, max_y: u32) -> Self {
        assert!(min_x <= max_x);
        assert!(min_y <= max_y);
        TileRect {
            zoom,
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Total number of tiles contained in this rectangle.
    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.max_x - self.min_x + 1) * u64::from(self.max_y - self.min_y + 1)
    }
}

/// Computes the rectangle of XYZ tiles covering a WGS84 extent at a zoom level.
///
/// Coordinates outside the Web-Mercator world are clamped to its edges, so a
/// valid extent always covers at least one tile; at zoom 0 it covers exactly
/// one. Returns `None` for an inverted extent (`right < left` or
/// `top < bottom`).
#[must_use]
pub fn tile_rect(extent: &Bounds, zoom: u8) -> Option<TileRect> {
    if extent.right < extent.left || extent.top < extent.bottom {
        return None;
    }
    let west = extent.left.clamp(-180.0, 180.0);
    let east = extent.right.clamp(-180.0, 180.0);
    let south = extent
        .bottom
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);
    let north = extent
        .top
        .clamp(-MAX_MERCATOR_LATITUDE, MAX_MERCATOR_LATITUDE);

    let (x0, y0) = wgs84_to_webmercator(west, south);
    let (x1, y1) = wgs84_to_webmercator(east, north);
    // rows grow southward, so the north edge yields the minimum row
    let (min_x, max_y) = tile_index(x0, y0, zoom);
    let (max_x, min_y) = tile_index(x1, y1, zoom);
    Some(TileRect::new(zoom, min_x, min_y, max_x, max_y))
}
