//! Geometry-type driven floor for the max zoom.

use tracing::debug;

/// Geometry classification of a datasource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryType {
    /// Point features
    Point,
    /// Line features
    LineString,
    /// Polygon features
    Polygon,
    /// Mixed geometry collections
    Collection,
    /// Gridded raster data
    Raster,
}

/// Outcome of asking a datasource to describe itself.
///
/// A datasource that cannot describe itself (missing capability, driver
/// failure) reports [`GeometryInfo::Unknown`] instead of an error; nothing
/// is allowed to fail across this boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryInfo {
    /// The datasource reported its geometry type.
    Known(GeometryType),
    /// The datasource could not be described.
    Unknown,
}

/// Capability for datasources that can classify their own geometry.
pub trait Datasource {
    /// Describes the datasource geometry. Implementations must swallow
    /// driver errors and report [`GeometryInfo::Unknown`] instead.
    fn describe(&self) -> GeometryInfo;
}

/// Point features tile down to z10; they are sparse and lose precision
/// in large tile extents.
const POINT_SMALLEST_MAX_ZOOM: u8 = 10;

/// Picks the smallest max zoom a datasource should be tiled to, based on
/// its geometry type.
///
/// Point datasources get a deeper floor than everything else; a
/// datasource that cannot describe itself gets `default_max_zoom`.
pub fn data_type_max_zoom(datasource: &dyn Datasource, default_max_zoom: u8) -> u8 {
    match datasource.describe() {
        GeometryInfo::Known(GeometryType::Point) => POINT_SMALLEST_MAX_ZOOM,
        GeometryInfo::Known(_) => default_max_zoom,
        GeometryInfo::Unknown => {
            debug!("datasource could not be described, using max zoom {default_max_zoom}");
            default_max_zoom
        }
    }
}
