use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Estimate the zone visible from a station on an elevation grid.
#[derive(Parser, Debug)]
pub struct Cli {
    /// Analysis config file declaring the elevation grid.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Station x cell coordinate.
    #[arg(short, long)]
    pub x: i32,

    /// Station y cell coordinate.
    #[arg(short, long)]
    pub y: i32,

    /// Station height above the terrain, in meters.
    #[arg(long)]
    pub height: f64,

    /// Search radius, in cells.
    #[arg(short, long)]
    pub radius: i32,

    /// Scan rows in parallel.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write the visibility boundary as a GeoJSON polygon feature.
    Geojson {
        /// Output path.
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Plot the visible zone to the terminal.
    Plot,
}
