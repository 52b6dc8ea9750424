#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

mod calculator;
mod config;
mod datasource;
mod error;
mod minzoom;
mod resolution;
mod units;

pub use calculator::{ZoomCalculator, ZoomRange};
pub use config::ZoomConfig;
pub use datasource::{Datasource, GeometryInfo, GeometryType, data_type_max_zoom};
pub use error::{ZoomError, ZoomResult};
pub use minzoom::{DEFAULT_MIN_ZOOM_RATIO, DEFAULT_MIN_ZOOM_SIZE_LIMIT, dynamic_min_zoom};
pub use resolution::{
    EQUATORIAL_CIRCUMFERENCE, RESOLUTION_STEPS, spatial_resolutions, valid_spatial_resolutions,
};
pub use units::{Unit, convert_to_meters, unit_type};
