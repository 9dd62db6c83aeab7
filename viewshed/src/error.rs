use geo::geometry::Coord;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewshedError {
    #[error("missing required parameter '{0}'")]
    Builder(&'static str),

    #[error("station {station:?} outside {width}x{height} grid")]
    StationBounds {
        station: Coord<i32>,
        width: usize,
        height: usize,
    },

    #[error("eye height must be positive, got {0}")]
    EyeHeight(f64),

    #[error("search radius must be non-negative, got {0}")]
    Radius(i32),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
