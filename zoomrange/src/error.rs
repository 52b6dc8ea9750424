//! Error types for zoom-range estimation.

use std::path::PathBuf;

use tilejson::Bounds;

/// Errors that can occur while estimating a zoom range.
#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum ZoomError {
    /// The file whose size drives the estimate could not be stat-ed.
    #[error("IO error {0}: {1}")]
    IoError(#[source] std::io::Error, PathBuf),

    /// The extent is degenerate or malformed and covers no tiles.
    #[error("Error calculating min/max zoom: bounds [{0}] are invalid")]
    InvalidBounds(Bounds),

    /// The file is empty, so there is no data density to estimate from.
    #[error("Error calculating min/max zoom: total bytes of {0} is less than or equal to zero")]
    InvalidFileSize(PathBuf),

    /// An unrecognized unit token was passed to the unit converter.
    #[error(
        "Invalid unit type {0:?}, must be one of: [m, ft, mi, km, us-ft, us-mi, decimal degrees]"
    )]
    InvalidUnit(String),
}

/// A convenience [`Result`] for zoom-range operations.
pub type ZoomResult<T> = Result<T, ZoomError>;
