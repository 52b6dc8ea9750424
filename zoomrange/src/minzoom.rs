//! Dynamic min-zoom estimation for small-extent datasets.

use tilejson::Bounds;
use zoomrange_tile_utils::wgs84_to_webmercator;

/// Smallest fraction of a tile a dataset has to occupy for a zoom level
/// to be worth rendering.
pub const DEFAULT_MIN_ZOOM_RATIO: f64 = 0.05;

/// Extents whose smaller dimension exceeds this (meters) are too large
/// for dynamic estimation.
pub const DEFAULT_MIN_ZOOM_SIZE_LIMIT: f64 = 5_000.0;

/// Estimates the smallest zoom level at which a dataset still occupies a
/// meaningful fraction of a tile.
///
/// Low zoom levels render small datasets imperceptibly small; this walks
/// the resolution table and drops every level where the dataset's larger
/// dimension covers less than `tile_size * ratio` pixels. Returns `None`
/// when the extent's smaller dimension (in Web-Mercator meters) is at
/// least `size_limit` — the area is too large for dynamic estimation and
/// the caller has to fall back to a fixed default.
///
/// A near-zero extent fails the occupancy test at every level, pushing
/// the result toward the table length: tiny things need the deepest
/// zooms to be visible at all.
#[must_use]
pub fn dynamic_min_zoom(
    resolutions: &[f64],
    extent: &Bounds,
    tile_size: u32,
    ratio: f64,
    size_limit: f64,
) -> Option<u8> {
    let (x0, y0) = wgs84_to_webmercator(extent.left, extent.bottom);
    let (x1, y1) = wgs84_to_webmercator(extent.right, extent.top);
    let width = x1 - x0;
    let height = y1 - y0;
    let max_size = width.max(height);
    let min_size = width.min(height);

    if min_size >= size_limit {
        return None;
    }

    let occupancy_px = f64::from(tile_size) * ratio;
    let retained = resolutions
        .iter()
        .filter(|&&resolution| max_size / resolution >= occupancy_px)
        .count();

    Some(u8::try_from(resolutions.len() - retained).unwrap_or(u8::MAX))
}
