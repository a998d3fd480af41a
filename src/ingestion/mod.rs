pub mod csv_loader;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glam::DVec3;
use tracing::{debug, info};

use crate::error::{CsvMeshError, Result};

pub use csv_loader::{decode_points, PointDecoder};

/// Read and decode every data row of the CSV capture at `path`.
pub fn load_points(path: &Path) -> Result<Vec<DVec3>> {
    if !path.exists() {
        return Err(CsvMeshError::Input(format!(
            "Input file not found: {}",
            path.display()
        )));
    }

    info!(path = %path.display(), "Reading CSV capture");

    let file = File::open(path)
        .map_err(|e| CsvMeshError::Input(format!("Failed to open CSV: {e}")))?;
    let points = decode_points(BufReader::new(file))?;

    debug!(points = points.len(), "Decoded capture rows");
    Ok(points)
}
