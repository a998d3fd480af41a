use std::time::{Duration, Instant};

use tracing::info;

use crate::builder;
use crate::config::ImportConfig;
use crate::error::Result;
use crate::host::{ReportLevel, SceneHost};
use crate::ingestion;

/// Whether the import finished or was cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Finished,
    Cancelled,
}

/// Summary of a completed import run.
#[derive(Debug)]
pub struct ImportSummary {
    pub status: ImportStatus,
    pub vertices: usize,
    pub triangles: usize,
    pub duration: Duration,
}

/// Import orchestrator -- decode, build, hand off to the host.
pub struct Importer;

impl Importer {
    /// Run the full import.
    ///
    /// Cancellation is all-or-nothing: any failure aborts before the host
    /// receives a mesh. Exactly one report is emitted either way -- INFO
    /// on success, ERROR carrying the failure's message text.
    pub fn run<H: SceneHost>(config: &ImportConfig, host: &mut H) -> ImportSummary {
        let start = Instant::now();

        match Self::import(config, host) {
            Ok((vertices, triangles)) => {
                host.report(ReportLevel::Info, "Mesh imported successfully.");
                ImportSummary {
                    status: ImportStatus::Finished,
                    vertices,
                    triangles,
                    duration: start.elapsed(),
                }
            }
            Err(e) => {
                host.report(ReportLevel::Error, &e.to_string());
                ImportSummary {
                    status: ImportStatus::Cancelled,
                    vertices: 0,
                    triangles: 0,
                    duration: start.elapsed(),
                }
            }
        }
    }

    fn import<H: SceneHost>(config: &ImportConfig, host: &mut H) -> Result<(usize, usize)> {
        info!(input = %config.input.display(), "Starting import");

        info!("Stage 1/3: Decode");
        let points = ingestion::load_points(&config.input)?;

        info!("Stage 2/3: Build");
        let (mesh, stats) = builder::build(&points, &config.cleanup);
        info!(
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            "{}",
            stats.summary()
        );

        info!("Stage 3/3: Handoff");
        let counts = (mesh.vertex_count(), mesh.triangle_count());
        let handle = host.create_mesh(&mesh)?;
        host.insert_into_scene(handle)?;
        if config.listing {
            host.write_debug_listing(&mesh)?;
        }

        Ok(counts)
    }
}
