//! Calculator configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for [`ZoomCalculator`](crate::ZoomCalculator).
///
/// All values have documented defaults; passing the config explicitly
/// keeps estimates reproducible without process-wide state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Files smaller than this (bytes) consult the datasource geometry
    /// type for their max-zoom floor.
    pub smallest_max_zoom_file_size: u64,
    /// Files smaller than this (bytes) get their min zoom clamped to
    /// [`default_smallest_min_zoom`](Self::default_smallest_min_zoom).
    pub smallest_min_zoom_file_size: u64,
    /// Max-zoom floor when the geometry type gives no better answer.
    pub default_smallest_max_zoom: u8,
    /// Min-zoom ceiling applied to small files.
    pub default_smallest_min_zoom: u8,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            smallest_max_zoom_file_size: 1_000_000,
            smallest_min_zoom_file_size: 10_000_000,
            default_smallest_max_zoom: 6,
            default_smallest_min_zoom: 4,
        }
    }
}
