//! # Raster Viewshed Analysis
//!
//! `viewshed` estimates which cells of a digital elevation grid are
//! visible from an observer within a bounded search radius, accounting
//! for terrain occlusion along the sight line to each candidate cell,
//! and derives the boundary polygon of the visible region.
//!
//! The scan is a pure function of its inputs: the grid is borrowed
//! read-only, and no state persists between computations.

mod error;
mod geojson;
mod hull;
mod los;
mod raster;
mod scan;

pub use {
    crate::{
        error::ViewshedError,
        geojson::write_feature,
        hull::{boundary, Boundary},
        los::is_visible,
        raster::RasterLineIter,
        scan::{Viewshed, ViewshedBuilder},
    },
    demgrid, geo,
};
