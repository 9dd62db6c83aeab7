use crate::raster::RasterLineIter;
use demgrid::Grid;
use geo::geometry::Coord;

/// Returns whether `target` is visible from an observer whose eye
/// sits `eye_height_m` above the terrain at `station`.
///
/// Walks the rasterized line between the two cells, comparing each
/// intermediate cell's terrain elevation against the sight line,
/// linearly interpolated between the eye and the target elevation. A
/// cell occludes only when its terrain rises strictly above the sight
/// line; a cell exactly on the sight line leaves the target visible.
///
/// Pure: the result depends only on the arguments. A target equal to
/// the station is always visible.
pub fn is_visible(grid: &Grid, station: Coord<i32>, eye_height_m: f64, target: Coord<i32>) -> bool {
    let (z_station, z_target) = match (grid.get(station), grid.get(target)) {
        (Some(z0), Some(z1)) => (z0, z1),
        _ => return false,
    };
    if station == target {
        return true;
    }

    let z0 = z_station + eye_height_m;
    let d_total = planar_distance(station, target);

    let line: Vec<Coord<i32>> = RasterLineIter::new(station, target).collect();
    for &cell in &line[1..line.len() - 1] {
        let terrain_z = match grid.get(cell) {
            Some(z) => z,
            // Cells strictly between two in-bounds endpoints are
            // themselves in bounds.
            None => return false,
        };
        let expected_z = z0 + (z_target - z0) * (planar_distance(station, cell) / d_total);
        if terrain_z > expected_z {
            return false;
        }
    }
    true
}

/// Euclidean distance between two cell centers, in cells.
fn planar_distance(a: Coord<i32>, b: Coord<i32>) -> f64 {
    f64::from(b.x - a.x).hypot(f64::from(b.y - a.y))
}
