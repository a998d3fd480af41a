pub mod builder;
pub mod config;
pub mod error;
pub mod export;
pub mod host;
pub mod ingestion;
pub mod pipeline;
pub mod types;

pub use config::{CleanupConfig, ImportConfig};
pub use error::{CsvMeshError, Result};
pub use host::{FileSceneHost, ReportLevel, SceneHost};
pub use pipeline::{ImportStatus, ImportSummary, Importer};
pub use types::TriangleMesh;
