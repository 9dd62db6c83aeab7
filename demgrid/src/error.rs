use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("unparsable elevation sample at {path:?}:{row}:{col}")]
    Sample { path: PathBuf, row: usize, col: usize },

    #[error("row {row} of {path:?} has {found} samples, expected {expected}")]
    RowWidth {
        path: PathBuf,
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("{path:?} has {found} rows, expected {expected}")]
    Rows {
        path: PathBuf,
        found: usize,
        expected: usize,
    },
}
