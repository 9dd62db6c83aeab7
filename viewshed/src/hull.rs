use geo::geometry::Coord;
use std::collections::HashSet;

/// Boundary of a visibility set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Boundary {
    /// Fewer than three visible cells; no polygon exists.
    Insufficient,

    /// Convex hull vertices in counter-clockwise order, unclosed.
    ///
    /// All-collinear input collapses the hull to its two extreme
    /// endpoints.
    Hull(Vec<Coord<i32>>),
}

/// Returns the convex hull of `cells`, computed with the monotone
/// chain in O(N log N).
pub fn boundary(cells: &HashSet<Coord<i32>>) -> Boundary {
    if cells.len() < 3 {
        return Boundary::Insufficient;
    }

    let mut points: Vec<Coord<i32>> = cells.iter().copied().collect();
    points.sort_unstable_by_key(|c| (c.x, c.y));

    let mut lower: Vec<Coord<i32>> = Vec::new();
    for &p in &points {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], p) <= 0 {
            lower.pop();
        }
        lower.push(p);
    }

    let mut upper: Vec<Coord<i32>> = Vec::new();
    for &p in points.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], p) <= 0 {
            upper.pop();
        }
        upper.push(p);
    }

    // The last point of each chain is the first point of the other.
    lower.pop();
    upper.pop();
    lower.extend(upper);
    Boundary::Hull(lower)
}

/// Z component of `(b - a) × (c - a)`; positive for a left turn.
fn cross(a: Coord<i32>, b: Coord<i32>, c: Coord<i32>) -> i64 {
    i64::from(b.x - a.x) * i64::from(c.y - a.y) - i64::from(b.y - a.y) * i64::from(c.x - a.x)
}

#[cfg(test)]
mod tests {
    use super::{boundary, Boundary, Coord, HashSet};

    fn cells(raw: &[(i32, i32)]) -> HashSet<Coord<i32>> {
        raw.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    fn verts(raw: &[(i32, i32)]) -> Vec<Coord<i32>> {
        raw.iter().map(|&(x, y)| Coord { x, y }).collect()
    }

    #[test]
    fn test_fewer_than_three_cells_is_insufficient() {
        assert_eq!(boundary(&cells(&[])), Boundary::Insufficient);
        assert_eq!(boundary(&cells(&[(0, 0)])), Boundary::Insufficient);
        assert_eq!(boundary(&cells(&[(0, 0), (4, 2)])), Boundary::Insufficient);
    }

    #[test]
    fn test_collinear_cells_reduce_to_extremes() {
        let hull = boundary(&cells(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
        assert_eq!(hull, Boundary::Hull(verts(&[(0, 0), (3, 3)])));
    }

    #[test]
    fn test_square_hull_is_counter_clockwise() {
        let hull = boundary(&cells(&[
            (0, 0),
            (2, 0),
            (2, 2),
            (0, 2),
            (1, 1), // interior
            (1, 0), // edge midpoint
        ]));
        assert_eq!(hull, Boundary::Hull(verts(&[(0, 0), (2, 0), (2, 2), (0, 2)])));
    }

    #[test]
    fn test_triangle_with_interior_points() {
        let hull = boundary(&cells(&[(0, 0), (4, 0), (2, 3), (2, 1), (1, 1)]));
        assert_eq!(hull, Boundary::Hull(verts(&[(0, 0), (4, 0), (2, 3)])));
    }
}
