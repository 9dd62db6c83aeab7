use crate::{error::ViewshedError, hull::Boundary, los::is_visible};
use demgrid::Grid;
use geo::geometry::Coord;
use log::debug;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::collections::HashSet;

/// A computed viewshed: every grid cell visible from a station within
/// a search radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewshed {
    /// Station cell the scan was run from.
    pub station: Coord<i32>,

    /// Observer eye height above the terrain at `station` (meters).
    pub eye_height_m: f64,

    /// Search radius (cells).
    pub radius: i32,

    /// Cells visible from the station.
    pub visible: HashSet<Coord<i32>>,
}

impl Viewshed {
    pub fn builder() -> ViewshedBuilder {
        ViewshedBuilder {
            station: None,
            eye_height_m: None,
            radius: None,
            parallel: false,
        }
    }

    /// Returns the convex-hull boundary of the visible cells.
    pub fn boundary(&self) -> Boundary {
        crate::hull::boundary(&self.visible)
    }
}

pub struct ViewshedBuilder {
    /// Station cell (required).
    station: Option<Coord<i32>>,

    /// Observer eye height above the terrain, meters (required,
    /// positive).
    eye_height_m: Option<f64>,

    /// Search radius, cells (required, non-negative).
    radius: Option<i32>,

    /// Scan rows in parallel (defaults to false).
    parallel: bool,
}

impl ViewshedBuilder {
    /// Station cell (required).
    #[must_use]
    pub fn station(mut self, cell: Coord<i32>) -> Self {
        self.station = Some(cell);
        self
    }

    /// Observer eye height above the terrain, meters (required,
    /// positive).
    #[must_use]
    pub fn eye_height(mut self, meters: f64) -> Self {
        self.eye_height_m = Some(meters);
        self
    }

    /// Search radius, cells (required, non-negative). A radius of
    /// zero yields exactly the station cell.
    #[must_use]
    pub fn radius(mut self, cells: i32) -> Self {
        self.radius = Some(cells);
        self
    }

    /// Scan rows in parallel (defaults to false). The result set is
    /// identical to a sequential scan.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the scan against `grid`.
    ///
    /// Candidates are every cell of the `(2r + 1)²` square around the
    /// station whose Euclidean offset norm is at most `radius`
    /// (boundary inclusive); out-of-bounds candidates are silently
    /// skipped. Cost grows as O(radius³): O(radius²) candidates, each
    /// tested along a sight line of up to `radius` cells. No internal
    /// radius ceiling is imposed; callers pick a bound they can
    /// afford.
    pub fn build(&self, grid: &Grid) -> Result<Viewshed, ViewshedError> {
        let station = self.station.ok_or(ViewshedError::Builder("station"))?;
        let eye_height_m = self
            .eye_height_m
            .ok_or(ViewshedError::Builder("eye_height"))?;
        let radius = self.radius.ok_or(ViewshedError::Builder("radius"))?;

        if !grid.contains(station) {
            return Err(ViewshedError::StationBounds {
                station,
                width: grid.width(),
                height: grid.height(),
            });
        }
        if eye_height_m <= 0.0 {
            return Err(ViewshedError::EyeHeight(eye_height_m));
        }
        if radius < 0 {
            return Err(ViewshedError::Radius(radius));
        }

        let now = std::time::Instant::now();
        let visible: HashSet<Coord<i32>> = if self.parallel {
            (-radius..=radius)
                .into_par_iter()
                .flat_map_iter(|dy| scan_row(grid, station, eye_height_m, radius, dy))
                .collect()
        } else {
            (-radius..=radius)
                .flat_map(|dy| scan_row(grid, station, eye_height_m, radius, dy))
                .collect()
        };
        debug!(
            "viewshed; station: {station:?}, radius: {radius}, visible: {}, exec: {:?}",
            visible.len(),
            now.elapsed()
        );

        Ok(Viewshed {
            station,
            eye_height_m,
            radius,
            visible,
        })
    }
}

/// Scans one row of candidate offsets, yielding the visible cells.
fn scan_row(
    grid: &Grid,
    station: Coord<i32>,
    eye_height_m: f64,
    radius: i32,
    dy: i32,
) -> impl Iterator<Item = Coord<i32>> + '_ {
    (-radius..=radius).filter_map(move |dx| {
        // Exact integer form of hypot(dx, dy) <= radius; keeps the
        // circular mask inclusive at distance == radius.
        if i64::from(dx) * i64::from(dx) + i64::from(dy) * i64::from(dy)
            > i64::from(radius) * i64::from(radius)
        {
            return None;
        }
        let candidate = Coord {
            x: station.x + dx,
            y: station.y + dy,
        };
        if !grid.contains(candidate) {
            return None;
        }
        is_visible(grid, station, eye_height_m, candidate).then_some(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::{Coord, Grid, HashSet, Viewshed, ViewshedError};

    fn cell(x: i32, y: i32) -> Coord<i32> {
        Coord { x, y }
    }

    #[test]
    fn test_missing_builder_parameter() {
        let grid = Grid::flat(5, 5, 0.0);
        match Viewshed::builder().station(cell(2, 2)).radius(1).build(&grid) {
            Err(ViewshedError::Builder(param)) => assert_eq!(param, "eye_height"),
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_station_outside_grid() {
        let grid = Grid::flat(5, 5, 0.0);
        let result = Viewshed::builder()
            .station(cell(5, 2))
            .eye_height(2.0)
            .radius(1)
            .build(&grid);
        assert!(matches!(result, Err(ViewshedError::StationBounds { .. })));
    }

    #[test]
    fn test_non_positive_eye_height() {
        let grid = Grid::flat(5, 5, 0.0);
        let result = Viewshed::builder()
            .station(cell(2, 2))
            .eye_height(0.0)
            .radius(1)
            .build(&grid);
        assert!(matches!(result, Err(ViewshedError::EyeHeight(_))));
    }

    #[test]
    fn test_negative_radius() {
        let grid = Grid::flat(5, 5, 0.0);
        let result = Viewshed::builder()
            .station(cell(2, 2))
            .eye_height(2.0)
            .radius(-1)
            .build(&grid);
        assert!(matches!(result, Err(ViewshedError::Radius(-1))));
    }

    #[test]
    fn test_zero_radius_yields_station_only() {
        let grid = Grid::flat(5, 5, 0.0);
        let viewshed = Viewshed::builder()
            .station(cell(2, 2))
            .eye_height(2.0)
            .radius(0)
            .build(&grid)
            .unwrap();
        assert_eq!(viewshed.visible, HashSet::from([cell(2, 2)]));
    }

    #[test]
    fn test_station_always_in_own_viewshed() {
        let mut samples = vec![0.0; 7 * 7];
        // Wall the station in.
        for x in 0..7 {
            samples[2 * 7 + x] = 500.0;
            samples[4 * 7 + x] = 500.0;
        }
        let grid = Grid::from_samples(7, 7, samples);
        let viewshed = Viewshed::builder()
            .station(cell(3, 3))
            .eye_height(1.0)
            .radius(3)
            .build(&grid)
            .unwrap();
        assert!(viewshed.visible.contains(&cell(3, 3)));
    }

    #[test]
    fn test_flat_grid_visible_set_is_the_circle() {
        let grid = Grid::flat(11, 11, 3.0);
        let station = cell(5, 5);
        let radius = 4;
        let viewshed = Viewshed::builder()
            .station(station)
            .eye_height(1.5)
            .radius(radius)
            .build(&grid)
            .unwrap();

        let mut expected = HashSet::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    expected.insert(cell(station.x + dx, station.y + dy));
                }
            }
        }
        assert_eq!(viewshed.visible, expected);
        // Boundary-inclusive radius test: distance == radius is in.
        assert!(viewshed.visible.contains(&cell(5 + radius, 5)));
    }

    #[test]
    fn test_out_of_bounds_candidates_are_skipped() {
        let grid = Grid::flat(4, 4, 0.0);
        let viewshed = Viewshed::builder()
            .station(cell(0, 0))
            .eye_height(2.0)
            .radius(10)
            .build(&grid)
            .unwrap();
        assert_eq!(viewshed.visible.len(), 16);
    }

    #[test]
    fn test_spike_casts_a_shadow() {
        let mut samples = vec![0.0; 11 * 11];
        samples[5 * 11 + 5] = 100.0;
        let grid = Grid::from_samples(11, 11, samples);
        let viewshed = Viewshed::builder()
            .station(cell(1, 5))
            .eye_height(2.0)
            .radius(9)
            .build(&grid)
            .unwrap();

        for x in 2..=5 {
            assert!(viewshed.visible.contains(&cell(x, 5)), "{x}");
        }
        for x in 6..11 {
            assert!(!viewshed.visible.contains(&cell(x, 5)), "{x}");
        }
    }

    #[test]
    fn test_determinism() {
        let samples = (0..13 * 13)
            .map(|idx| f64::from(u32::try_from(idx % 7).unwrap()) * 3.0)
            .collect::<Vec<f64>>();
        let grid = Grid::from_samples(13, 13, samples);
        let build = || {
            Viewshed::builder()
                .station(cell(6, 6))
                .eye_height(2.0)
                .radius(5)
                .build(&grid)
                .unwrap()
        };
        assert_eq!(build().visible, build().visible);
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let samples = (0..21 * 21)
            .map(|idx| {
                let (x, y) = (idx % 21, idx / 21);
                #[allow(clippy::cast_precision_loss)]
                let z = ((x as f64) * 0.9).sin() * 30.0 + ((y as f64) * 0.4).cos() * 20.0;
                z
            })
            .collect::<Vec<f64>>();
        let grid = Grid::from_samples(21, 21, samples);

        let sequential = Viewshed::builder()
            .station(cell(10, 10))
            .eye_height(5.0)
            .radius(8)
            .build(&grid)
            .unwrap();
        let parallel = Viewshed::builder()
            .station(cell(10, 10))
            .eye_height(5.0)
            .radius(8)
            .parallel(true)
            .build(&grid)
            .unwrap();
        assert_eq!(sequential.visible, parallel.visible);
    }
}
