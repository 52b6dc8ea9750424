#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod rectangle;
pub use rectangle::{TileRect, tile_rect};

/// WGS84 equatorial radius in meters.
pub const EARTH_RADIUS: f64 = 6_378_137.0;

/// WGS84 equatorial circumference in meters, i.e. the extent of the
/// Web-Mercator plane along either axis.
pub const EARTH_CIRCUMFERENCE: f64 = 40_075_016.685_578_5;

/// Northernmost latitude representable in Web-Mercator; the projection
/// diverges beyond it.
pub const MAX_MERCATOR_LATITUDE: f64 = 85.051_128_779_806_59;

/// Project WGS84 degrees to Web-Mercator (EPSG:3857) meters.
#[must_use]
pub fn wgs84_to_webmercator(lon: f64, lat: f64) -> (f64, f64) {
    let x = lon.to_radians() * EARTH_RADIUS;
    let y = f64::tan(std::f64::consts::FRAC_PI_4 + lat.to_radians() / 2.0).ln() * EARTH_RADIUS;
    (x, y)
}

/// Project Web-Mercator (EPSG:3857) meters back to WGS84 degrees.
#[must_use]
pub fn webmercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let lng = (x / EARTH_RADIUS).to_degrees();
    let lat = f64::atan(f64::sinh(y / EARTH_RADIUS)).to_degrees();
    (lng, lat)
}

/// Convert web mercator x and y to a clamped XYZ tile index for a given zoom.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
pub fn tile_index(x: f64, y: f64, zoom: u8) -> (u32, u32) {
    let tile_size = EARTH_CIRCUMFERENCE / f64::from(1_u32 << zoom);
    let half = EARTH_CIRCUMFERENCE / 2.0;
    let col = (((x + half).abs() / tile_size) as u32).min((1 << zoom) - 1);
    let row = (((half - y).abs() / tile_size) as u32).min((1 << zoom) - 1);
    (col, row)
}
