use geo::geometry::Coord;

/// Integer Bresenham rasterization of the segment joining two grid
/// cells.
///
/// Yields every cell from `start` to `end` inclusive, in order. The
/// sequence is 8-connected and duplicate-free, with exactly
/// `max(|Δx|, |Δy|) + 1` cells; identical endpoints yield a single
/// cell.
#[derive(Debug, Clone)]
pub struct RasterLineIter {
    x: i32,
    y: i32,
    step_x: i32,
    step_y: i32,
    /// Twice the delta along the driving axis.
    run: i32,
    /// Twice the delta along the minor axis.
    rise: i32,
    x_major: bool,
    error: i32,
    remaining: usize,
}

impl RasterLineIter {
    #[allow(clippy::cast_sign_loss)]
    pub fn new(start: Coord<i32>, end: Coord<i32>) -> Self {
        let dx = (end.x - start.x).abs();
        let dy = (end.y - start.y).abs();
        let x_major = dx > dy;
        let (major, minor) = if x_major { (dx, dy) } else { (dy, dx) };

        Self {
            x: start.x,
            y: start.y,
            step_x: if end.x < start.x { -1 } else { 1 },
            step_y: if end.y < start.y { -1 } else { 1 },
            run: 2 * major,
            rise: 2 * minor,
            x_major,
            // Half the driving delta, kept integral by scaling the
            // whole error term by two.
            error: major,
            remaining: (major + 1) as usize,
        }
    }
}

impl Iterator for RasterLineIter {
    type Item = Coord<i32>;

    fn next(&mut self) -> Option<Coord<i32>> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let cell = Coord { x: self.x, y: self.y };
        if self.remaining > 0 {
            self.error -= self.rise;
            if self.error < 0 {
                if self.x_major {
                    self.y += self.step_y;
                } else {
                    self.x += self.step_x;
                }
                self.error += self.run;
            }
            if self.x_major {
                self.x += self.step_x;
            } else {
                self.y += self.step_y;
            }
        }
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RasterLineIter {}
