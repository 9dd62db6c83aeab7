use crate::{error::ViewshedError, hull::Boundary};
use geo::geometry::Coord;
use serde::Serialize;
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

#[derive(Serialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: Geometry,
    properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: Vec<Vec<[i32; 2]>>,
}

/// Writes `boundary` to `path` as a GeoJSON polygon feature.
///
/// The feature holds a single linear ring of `[x, y]` pairs, closed
/// by repeating the first hull vertex, with an empty `properties`
/// object. Missing parent directories are created first. Returns the
/// destination path on success, or `None` without touching the
/// filesystem when the boundary is [`Boundary::Insufficient`]. I/O
/// failures propagate to the caller and are never retried here; the
/// computation is deterministic, so the caller can simply rerun it.
pub fn write_feature(boundary: &Boundary, path: &Path) -> Result<Option<PathBuf>, ViewshedError> {
    let vertices = match boundary {
        Boundary::Insufficient => return Ok(None),
        Boundary::Hull(vertices) => vertices,
    };

    let ring: Vec<[i32; 2]> = vertices
        .iter()
        .chain(vertices.first())
        .map(|&Coord { x, y }| [x, y])
        .collect();
    let feature = Feature {
        kind: "Feature",
        geometry: Geometry {
            kind: "Polygon",
            coordinates: vec![ring],
        },
        properties: serde_json::Map::new(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer(file, &feature)?;
    Ok(Some(path.to_path_buf()))
}
