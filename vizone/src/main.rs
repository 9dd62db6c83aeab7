#![allow(clippy::cast_precision_loss)]

mod config;
mod options;

use anyhow::Error as AnyError;
use clap::Parser;
use config::Config;
use demgrid::Grid;
use options::{Cli, Command as CliCmd};
use textplots::{Chart, Plot, Shape};
use viewshed::{geo::geometry::Coord, Boundary, Viewshed};

fn main() -> Result<(), AnyError> {
    let cli = Cli::parse();

    env_logger::init();

    let config = Config::load(&cli.config)?;
    let grid = Grid::from_csv(&config.grid_path, (config.grid_width, config.grid_height))?;

    let zone = Viewshed::builder()
        .station(Coord { x: cli.x, y: cli.y })
        .eye_height(cli.height)
        .radius(cli.radius)
        .parallel(cli.parallel)
        .build(&grid)?;

    match cli.cmd {
        CliCmd::Geojson { out } => match viewshed::write_feature(&zone.boundary(), &out)? {
            Some(path) => println!("{}", path.display()),
            None => eprintln!(
                "only {} cells visible; no boundary polygon written",
                zone.visible.len()
            ),
        },
        CliCmd::Plot => plot_ascii(&grid, &zone),
    }
    Ok(())
}

/// Plots the visible cells and hull outline to the terminal.
fn plot_ascii(grid: &Grid, zone: &Viewshed) {
    let visible: Vec<(f32, f32)> = zone
        .visible
        .iter()
        .map(|cell| (cell.x as f32, cell.y as f32))
        .collect();

    let outline: Vec<(f32, f32)> = match zone.boundary() {
        Boundary::Hull(vertices) => vertices
            .iter()
            .chain(vertices.first())
            .map(|cell| (cell.x as f32, cell.y as f32))
            .collect(),
        Boundary::Insufficient => Vec::new(),
    };

    Chart::new(180, 120, 0.0, grid.width() as f32)
        .lineplot(&Shape::Points(&visible))
        .lineplot(&Shape::Lines(&outline))
        .display();
}
