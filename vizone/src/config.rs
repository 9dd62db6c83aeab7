use anyhow::{Context, Error as AnyError};
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Analysis configuration: where the elevation raster lives and the
/// grid shape it must have. Shape validation happens when the grid is
/// loaded, not here.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Path to the headerless CSV elevation matrix.
    pub grid_path: PathBuf,

    /// Expected grid width, in cells.
    pub grid_width: usize,

    /// Expected grid height, in cells.
    pub grid_height: usize,
}

impl Config {
    pub fn load(path: &Path) -> Result<Config, AnyError> {
        let raw =
            fs::read_to_string(path).with_context(|| format!("reading config {path:?}"))?;
        let config = toml::from_str(&raw).with_context(|| format!("parsing config {path:?}"))?;
        Ok(config)
    }
}
