//! Size-driven search for the tiling zoom range.
#![allow(clippy::cast_precision_loss)]

use std::path::Path;

use serde::Serialize;
use tilejson::Bounds;
use tokio::fs;
use tracing::{debug, trace};
use zoomrange_tile_utils::tile_rect;

use crate::config::ZoomConfig;
use crate::datasource::{Datasource, data_type_max_zoom};
use crate::error::{ZoomError, ZoomResult};
use crate::minzoom::dynamic_min_zoom;
use crate::resolution::spatial_resolutions;

/// Ceiling of the zoom search; candidates descend from here.
const MAX_SEARCH_ZOOM: u8 = 22;
/// Bytes per tile below which a zoom level counts as sparse.
const SPARSE_TILE_BYTES: f64 = 1000.0;
/// Bytes per tile above which tiles are too coarse; terminates the search.
const COARSE_TILE_BYTES: f64 = 500.0 * 1024.0;
/// Tile edge in pixels assumed for the dynamic min-zoom estimate.
const MIN_ZOOM_TILE_SIZE: u32 = 512;
/// Smallest tile fraction the dataset has to occupy in the min-zoom estimate.
const MIN_ZOOM_RATIO: f64 = 0.1;

/// An inclusive min/max zoom pair, `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ZoomRange {
    /// Smallest zoom level worth rendering
    pub min: u8,
    /// Deepest zoom level worth rendering
    pub max: u8,
}

/// Estimates the zoom range for a dataset from its file size and extent.
///
/// The calculator holds only configuration; every estimate is computed
/// from scratch, so concurrent calls are independent.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZoomCalculator {
    config: ZoomConfig,
}

impl ZoomCalculator {
    /// Creates a calculator with the given configuration.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self { config }
    }

    /// Estimates the zoom range for the file at `path` covering `extent`
    /// (WGS84 degrees).
    ///
    /// Use this form when no datasource is available; the max-zoom floor
    /// falls back to the configured default.
    pub async fn zoom_range_for_file(&self, path: &Path, extent: Bounds) -> ZoomResult<ZoomRange> {
        self.zoom_range(path, extent, None).await
    }

    /// Estimates the zoom range for the file at `path` covering `extent`,
    /// consulting `datasource` for a geometry-type based max-zoom floor.
    pub async fn zoom_range_for_datasource(
        &self,
        path: &Path,
        extent: Bounds,
        datasource: &dyn Datasource,
    ) -> ZoomResult<ZoomRange> {
        self.zoom_range(path, extent, Some(datasource)).await
    }

    async fn zoom_range(
        &self,
        path: &Path,
        extent: Bounds,
        datasource: Option<&dyn Datasource>,
    ) -> ZoomResult<ZoomRange> {
        let metadata = fs::metadata(path)
            .await
            .map_err(|e| ZoomError::IoError(e, path.to_path_buf()))?;
        let file_size = metadata.len();
        if file_size == 0 {
            return Err(ZoomError::InvalidFileSize(path.to_path_buf()));
        }
        self.search(file_size, extent, datasource)
    }

    /// The descending scan over candidate zoom levels.
    ///
    /// Two absorbing exits: the coarse-density stop (tiles carry too many
    /// bytes) and the single-tile/pyramid-floor stop. While tiles stay
    /// sparse the max candidate keeps refining downward.
    fn search(
        &self,
        file_size: u64,
        extent: Bounds,
        datasource: Option<&dyn Datasource>,
    ) -> ZoomResult<ZoomRange> {
        let resolutions = spatial_resolutions();
        // The size limit is disabled here on purpose: large extents get an
        // estimate too instead of falling back to a fixed default.
        let smallest_min_zoom = dynamic_min_zoom(
            &resolutions,
            &extent,
            MIN_ZOOM_TILE_SIZE,
            MIN_ZOOM_RATIO,
            f64::INFINITY,
        )
        .unwrap_or(0);

        let smallest_max_zoom = if file_size < self.config.smallest_max_zoom_file_size {
            datasource.map_or(self.config.default_smallest_max_zoom, |ds| {
                data_type_max_zoom(ds, self.config.default_smallest_max_zoom)
            })
        } else {
            self.config.default_smallest_max_zoom
        };

        let mut max = MAX_SEARCH_ZOOM;
        let mut z = MAX_SEARCH_ZOOM;
        loop {
            let tiles = tile_rect(&extent, z)
                .ok_or(ZoomError::InvalidBounds(extent))?
                .size();
            let avg = file_size as f64 / tiles as f64;
            trace!("zoom {z}: {tiles} tiles, {avg:.1} bytes/tile");

            if avg < SPARSE_TILE_BYTES {
                max = z;
            }
            if avg > COARSE_TILE_BYTES {
                max = max.max(smallest_max_zoom);
                let mut min = smallest_min_zoom.min(z);
                if file_size < self.config.smallest_min_zoom_file_size {
                    min = min.min(self.config.default_smallest_min_zoom);
                }
                let min = min.min(max);
                debug!("coarse-density stop at zoom {z}: range {min}..={max}");
                return Ok(ZoomRange { min, max });
            }
            if tiles == 1 || z == 0 {
                max = max.max(smallest_max_zoom);
                let min = max
                    .min(smallest_min_zoom)
                    .min(self.config.default_smallest_min_zoom);
                debug!("pyramid-floor stop at zoom {z}: range {min}..={max}");
                return Ok(ZoomRange {
                    min: min.min(max),
                    max: max.max(min),
                });
            }
            // z == 0 always hits the floor stop above, so this never underflows
            z -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::datasource::{GeometryInfo, GeometryType};

    fn file_of_size(bytes: u64) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        if bytes > 0 {
            file.as_file().set_len(bytes).expect("set file length");
            // make sure at least something is physically written
            file.write_all(&[0]).expect("write");
        }
        file
    }

    struct PointSource;

    impl Datasource for PointSource {
        fn describe(&self) -> GeometryInfo {
            GeometryInfo::Known(GeometryType::Point)
        }
    }

    #[tokio::test]
    async fn small_file_small_extent() {
        let file = file_of_size(200);
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(-1.0, -1.0, 1.0, 1.0);

        let range = calc
            .zoom_range_for_file(file.path(), extent)
            .await
            .expect("zoom range");
        assert_eq!(range, ZoomRange { min: 4, max: 6 });
    }

    #[tokio::test]
    async fn point_datasource_deepens_the_floor() {
        let file = file_of_size(200);
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(-1.0, -1.0, 1.0, 1.0);

        let range = calc
            .zoom_range_for_datasource(file.path(), extent, &PointSource)
            .await
            .expect("zoom range");
        assert_eq!(range, ZoomRange { min: 4, max: 10 });
    }

    #[tokio::test]
    async fn large_file_global_extent_stops_on_density() {
        let file = file_of_size(50_000_000);
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(-180.0, -85.0, 180.0, 85.0);

        let range = calc
            .zoom_range_for_file(file.path(), extent)
            .await
            .expect("zoom range");
        assert_eq!(range, ZoomRange { min: 0, max: 8 });
    }

    #[tokio::test]
    async fn point_floor_ignored_for_large_files() {
        // above the small-file threshold the geometry type must not matter
        let file = file_of_size(10_000_000);
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(-1.0, -1.0, 1.0, 1.0);

        let with_ds = calc
            .zoom_range_for_datasource(file.path(), extent, &PointSource)
            .await
            .expect("zoom range");
        let without_ds = calc
            .zoom_range_for_file(file.path(), extent)
            .await
            .expect("zoom range");
        assert_eq!(with_ds, without_ds);
        assert_eq!(with_ds, ZoomRange { min: 6, max: 15 });
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let file = NamedTempFile::new().expect("temp file");
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(-1.0, -1.0, 1.0, 1.0);

        let err = calc
            .zoom_range_for_file(file.path(), extent)
            .await
            .expect_err("empty file");
        assert!(matches!(err, ZoomError::InvalidFileSize(_)));
    }

    #[tokio::test]
    async fn missing_file_surfaces_the_stat_error() {
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(-1.0, -1.0, 1.0, 1.0);

        let err = calc
            .zoom_range_for_file(Path::new("/does/not/exist"), extent)
            .await
            .expect_err("missing file");
        assert!(matches!(err, ZoomError::IoError(..)));
    }

    #[tokio::test]
    async fn inverted_extent_is_rejected() {
        let file = file_of_size(200);
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(1.0, -1.0, -1.0, 1.0);

        let err = calc
            .zoom_range_for_file(file.path(), extent)
            .await
            .expect_err("inverted extent");
        assert!(matches!(err, ZoomError::InvalidBounds(_)));
    }

    #[tokio::test]
    async fn estimates_are_idempotent() {
        let file = file_of_size(123_456);
        let calc = ZoomCalculator::new(ZoomConfig::default());
        let extent = Bounds::new(5.5, 45.0, 6.5, 46.0);

        let first = calc
            .zoom_range_for_file(file.path(), extent)
            .await
            .expect("zoom range");
        let second = calc
            .zoom_range_for_file(file.path(), extent)
            .await
            .expect("zoom range");
        assert_eq!(first, second);
        assert!(first.min <= first.max);
    }
}
