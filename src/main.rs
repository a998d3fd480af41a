use clap::Parser;
use tracing_subscriber::EnvFilter;

use csv_mesh::config::{CliArgs, ImportConfig};
use csv_mesh::host::FileSceneHost;
use csv_mesh::pipeline::{ImportStatus, Importer};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Init tracing
    let filter = if args.verbose {
        EnvFilter::new("csv_mesh=debug")
    } else {
        EnvFilter::new("csv_mesh=info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config: ImportConfig = args.into();

    let stem = config
        .input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh")
        .to_string();
    let mut host = FileSceneHost::new(&config.output, stem);

    let summary = Importer::run(&config, &mut host);
    match summary.status {
        ImportStatus::Finished => {
            println!(
                "Done: {} vertices, {} triangles in {:.2}s",
                summary.vertices,
                summary.triangles,
                summary.duration.as_secs_f64()
            );
            Ok(())
        }
        ImportStatus::Cancelled => {
            let message = host
                .reports()
                .last()
                .map(|(_, m)| m.clone())
                .unwrap_or_else(|| "import cancelled".to_string());
            Err(anyhow::anyhow!(message).context("csv-mesh import cancelled"))
        }
    }
}
