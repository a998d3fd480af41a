use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use tracing::{error, info};

use crate::error::Result;
use crate::export;
use crate::types::TriangleMesh;

/// Severity of a host report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Error,
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportLevel::Info => f.write_str("INFO"),
            ReportLevel::Error => f.write_str("ERROR"),
        }
    }
}

/// Capability surface the importer hands its finished mesh to.
///
/// Mirrors a host application's scene API: mesh creation, scene insertion,
/// one status report per import, and a plain-text vertex listing.
pub trait SceneHost {
    type MeshHandle;
    type ObjectHandle;

    /// Materialize the finished mesh into a host-owned handle.
    fn create_mesh(&mut self, mesh: &TriangleMesh) -> Result<Self::MeshHandle>;

    /// Insert a created mesh into the host scene.
    fn insert_into_scene(&mut self, mesh: Self::MeshHandle) -> Result<Self::ObjectHandle>;

    /// Emit a status report. Called exactly once per import.
    fn report(&mut self, level: ReportLevel, message: &str);

    /// Produce the debug text artifact: a `Vertices:` header, then one
    /// `(x, y, z)` line per final vertex.
    fn write_debug_listing(&mut self, mesh: &TriangleMesh) -> Result<()>;
}

/// Host that materializes the scene on disk: the mesh as a Wavefront OBJ
/// file, the debug listing as `vertices.txt`.
pub struct FileSceneHost {
    output_dir: PathBuf,
    stem: String,
    reports: Vec<(ReportLevel, String)>,
}

impl FileSceneHost {
    pub fn new(output_dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            stem: stem.into(),
            reports: Vec::new(),
        }
    }

    /// Reports emitted so far, in order.
    pub fn reports(&self) -> &[(ReportLevel, String)] {
        &self.reports
    }

    /// Destination of the mesh object file.
    pub fn obj_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.obj", self.stem))
    }

    /// Destination of the vertex listing.
    pub fn listing_path(&self) -> PathBuf {
        self.output_dir.join("vertices.txt")
    }
}

impl SceneHost for FileSceneHost {
    type MeshHandle = TriangleMesh;
    type ObjectHandle = PathBuf;

    fn create_mesh(&mut self, mesh: &TriangleMesh) -> Result<TriangleMesh> {
        Ok(mesh.clone())
    }

    fn insert_into_scene(&mut self, mesh: TriangleMesh) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.obj_path();
        let mut writer = BufWriter::new(File::create(&path)?);
        export::write_obj(&mesh, &mut writer)?;
        writer.flush()?;
        info!(path = %path.display(), "Wrote mesh object");
        Ok(path)
    }

    fn report(&mut self, level: ReportLevel, message: &str) {
        match level {
            ReportLevel::Info => info!("{message}"),
            ReportLevel::Error => error!("{message}"),
        }
        self.reports.push((level, message.to_string()));
    }

    fn write_debug_listing(&mut self, mesh: &TriangleMesh) -> Result<()> {
        fs::create_dir_all(&self.output_dir)?;
        let mut writer = BufWriter::new(File::create(self.listing_path())?);
        writeln!(writer, "Vertices:")?;
        for v in mesh.positions.chunks_exact(3) {
            writeln!(writer, "({}, {}, {})", v[0], v[1], v[2])?;
        }
        writer.flush()?;
        Ok(())
    }
}
