//! Per-zoom ground resolution of the standard tile pyramid.

/// Equatorial circumference of the Earth, rounded to the kilometer.
///
/// This is intentionally the coarser value historically used for the
/// resolution table and unit conversions, not the exact Web-Mercator
/// plane extent from `zoomrange-tile-utils`. Downstream thresholds were
/// tuned against it, so it must not be "corrected".
pub const EQUATORIAL_CIRCUMFERENCE: f64 = 40_075_000.0;

/// Number of zoom levels in the resolution table (zoom 0 through 24).
pub const RESOLUTION_STEPS: usize = 25;

/// Ground resolution in meters per pixel at the equator for every zoom
/// level of the pyramid, assuming 256px tiles.
///
/// `resolution(z) = EQUATORIAL_CIRCUMFERENCE / 2^(z + 8)`. The
/// cosine-of-latitude factor is fixed at latitude 0; callers get the
/// equatorial resolution regardless of where their extent sits.
#[must_use]
pub fn spatial_resolutions() -> [f64; RESOLUTION_STEPS] {
    let mut table = [0.0; RESOLUTION_STEPS];
    let mut resolution = EQUATORIAL_CIRCUMFERENCE / 256.0;
    for entry in &mut table {
        *entry = resolution;
        resolution /= 2.0;
    }
    table
}

/// Filters the resolution table down to the entries that can still
/// resolve a source pixel of `pixel_size` meters.
///
/// An entry is kept when its gap to the next-finer resolution, weighted
/// by `threshold_weight`, still exceeds the pixel size.
#[must_use]
pub fn valid_spatial_resolutions(
    resolutions: &[f64],
    pixel_size: f64,
    threshold_weight: f64,
) -> Vec<f64> {
    resolutions
        .iter()
        .enumerate()
        .filter_map(|(i, &res)| {
            let next = resolutions[(i + 1).min(resolutions.len() - 1)];
            (res - next * threshold_weight > pixel_size).then_some(res)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn table_has_25_decreasing_entries() {
        let table = spatial_resolutions();
        assert_eq!(table.len(), RESOLUTION_STEPS);
        for pair in table.windows(2) {
            assert!(pair[0] > pair[1]);
            assert_relative_eq!(pair[0] / pair[1], 2.0, epsilon = f64::EPSILON);
        }
    }

    #[test]
    fn equatorial_resolution_values() {
        let table = spatial_resolutions();
        assert_relative_eq!(table[0], 156_542.968_75, epsilon = f64::EPSILON);
        assert_relative_eq!(table[6], 2_445.983_886_718_75, epsilon = f64::EPSILON);
        assert_relative_eq!(table[24], 0.009_330_688_044_428_825, epsilon = 1e-15);
    }

    #[test]
    fn filter_drops_levels_below_pixel_size() {
        let table = spatial_resolutions();
        // a 10m source pixel cannot be resolved by the deepest levels
        let valid = valid_spatial_resolutions(&table, 10.0, 1.0);
        assert!(valid.len() < table.len());
        assert!(!valid.is_empty());
        for res in &valid {
            assert!(*res > 10.0);
        }

        assert!(valid_spatial_resolutions(&[], 10.0, 1.0).is_empty());
    }
}
