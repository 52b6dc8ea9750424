//! Conversion of projection units into meters.

use std::str::FromStr;

use crate::error::{ZoomError, ZoomResult};
use crate::resolution::EQUATORIAL_CIRCUMFERENCE;

/// A linear (or angular) unit recognized in projection definitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    /// Meters
    Meters,
    /// International feet
    Feet,
    /// Statute miles
    Miles,
    /// Kilometers
    Kilometers,
    /// US survey feet
    UsFeet,
    /// US survey miles
    UsMiles,
    /// Decimal degrees of longitude at the equator
    DecimalDegrees,
}

impl Unit {
    /// Converts a value expressed in this unit into meters.
    #[must_use]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Meters => value,
            Self::Feet | Self::UsFeet => value * 0.3048,
            Self::Miles | Self::UsMiles => value * 1609.34,
            Self::Kilometers => value * 1000.0,
            Self::DecimalDegrees => value / 360.0 * EQUATORIAL_CIRCUMFERENCE,
        }
    }
}

impl FromStr for Unit {
    type Err = ZoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "m" => Self::Meters,
            "ft" => Self::Feet,
            "mi" => Self::Miles,
            "km" => Self::Kilometers,
            "us-ft" => Self::UsFeet,
            "us-mi" => Self::UsMiles,
            "decimal degrees" => Self::DecimalDegrees,
            _ => return Err(ZoomError::InvalidUnit(s.to_string())),
        })
    }
}

/// Converts an (x, y) pixel size expressed in `unit` into meters.
pub fn convert_to_meters(pixel_size: (f64, f64), unit: &str) -> ZoomResult<(f64, f64)> {
    let unit = Unit::from_str(unit)?;
    Ok((unit.to_meters(pixel_size.0), unit.to_meters(pixel_size.1)))
}

/// Extracts the unit from a proj4-style projection definition string.
///
/// Scans for a `+units=<token>` parameter. A geographic definition
/// (`+proj=longlat`) without an explicit unit reports decimal degrees;
/// everything else falls back to meters. This is a best-effort heuristic,
/// not a projection parser.
#[must_use]
pub fn unit_type(projection: &str) -> Unit {
    if let Some((_, rest)) = projection.split_once("+units=") {
        let token = rest.split_whitespace().next().unwrap_or_default();
        return token.parse().unwrap_or(Unit::Meters);
    }
    if projection.contains("+proj=longlat") {
        return Unit::DecimalDegrees;
    }
    Unit::Meters
}
