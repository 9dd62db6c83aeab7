//! Headerless CSV digital elevation rasters.
//!
//! A [`Grid`] is a read-only, row-major matrix of elevation samples
//! in meters, indexed by integer `(x, y)` cell coordinates. Cell
//! `(x, y)` maps to `samples[y * width + x]`.

mod error;

pub use crate::error::DemError;
use geo::geometry::Coord;
use std::{fs, path::Path};

/// A read-only elevation raster.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Lowest elevation sample in this grid.
    min_elevation: f64,

    /// Highest elevation sample in this grid.
    max_elevation: f64,

    /// Row-major elevation samples.
    samples: Box<[f64]>,
}

impl Grid {
    /// Returns a Grid parsed from the headerless CSV matrix at `path`.
    ///
    /// `dimensions` is the `(width, height)` shape the file must
    /// have; any deviation is an error rather than a truncated or
    /// padded grid.
    pub fn from_csv<P: AsRef<Path>>(path: P, dimensions: (usize, usize)) -> Result<Self, DemError> {
        let path = path.as_ref();
        let (width, height) = dimensions;
        let contents = fs::read_to_string(path)?;

        let mut samples = Vec::with_capacity(width * height);
        let mut rows = 0;
        for (row, line) in contents.lines().enumerate() {
            let mut cols = 0;
            for (col, field) in line.split(',').enumerate() {
                let sample = field.trim().parse::<f64>().map_err(|_| DemError::Sample {
                    path: path.to_owned(),
                    row: row + 1,
                    col: col + 1,
                })?;
                samples.push(sample);
                cols += 1;
            }
            if cols != width {
                return Err(DemError::RowWidth {
                    path: path.to_owned(),
                    row: row + 1,
                    found: cols,
                    expected: width,
                });
            }
            rows += 1;
        }
        if rows != height {
            return Err(DemError::Rows {
                path: path.to_owned(),
                found: rows,
                expected: height,
            });
        }

        Ok(Self::from_samples(width, height, samples))
    }

    /// Returns a Grid over `samples`, which must hold exactly
    /// `width * height` row-major values.
    pub fn from_samples(width: usize, height: usize, samples: Vec<f64>) -> Self {
        assert_eq!(samples.len(), width * height);
        let (min_elevation, max_elevation) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), &z| {
                (min.min(z), max.max(z))
            });
        Self {
            width,
            height,
            min_elevation,
            max_elevation,
            samples: samples.into_boxed_slice(),
        }
    }

    /// Returns a Grid of `width * height` cells, all at `elevation`.
    pub fn flat(width: usize, height: usize, elevation: f64) -> Self {
        Self::from_samples(width, height, vec![elevation; width * height])
    }

    /// Returns whether `cell` lies inside the grid.
    #[allow(clippy::cast_sign_loss)]
    pub fn contains(&self, cell: Coord<i32>) -> bool {
        0 <= cell.x
            && (cell.x as usize) < self.width
            && 0 <= cell.y
            && (cell.y as usize) < self.height
    }

    /// Returns the sample at `cell`, or `None` if out of bounds.
    pub fn get(&self, cell: Coord<i32>) -> Option<f64> {
        if self.contains(cell) {
            Some(self.get_unchecked(cell))
        } else {
            None
        }
    }

    /// Returns the sample at `cell`.
    ///
    /// Panics if `cell` is out of bounds.
    #[allow(clippy::cast_sign_loss)]
    pub fn get_unchecked(&self, cell: Coord<i32>) -> f64 {
        self.samples[cell.y as usize * self.width + cell.x as usize]
    }

    /// Returns the number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of samples in this grid.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Returns the lowest elevation sample in this grid.
    pub fn min_elevation(&self) -> f64 {
        self.min_elevation
    }

    /// Returns the highest elevation sample in this grid.
    pub fn max_elevation(&self) -> f64 {
        self.max_elevation
    }
}
