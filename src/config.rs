use std::path::PathBuf;

use clap::Parser;

/// Mesh cleanup parameters.
#[derive(Debug, Clone)]
pub struct CleanupConfig {
    /// Vertices closer than this are welded into one.
    pub merge_threshold: f64,
    /// Delete explicit edges that border no face.
    pub remove_loose: bool,
    /// Propagate a consistent winding across connected faces.
    pub orient_normals: bool,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            merge_threshold: 0.001,
            remove_loose: true,
            orient_normals: true,
        }
    }
}

/// Fully resolved import configuration (constructed from CLI args).
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub cleanup: CleanupConfig,
    pub listing: bool,
    pub verbose: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            cleanup: CleanupConfig::default(),
            listing: true,
            verbose: false,
        }
    }
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "csv-mesh",
    about = "CSV point-capture to triangulated mesh importer",
    version
)]
pub struct CliArgs {
    /// Input CSV file
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// Output directory
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Weld distance threshold
    #[arg(long, default_value_t = 0.001)]
    pub merge_threshold: f64,

    /// Keep edges that border no face
    #[arg(long)]
    pub keep_loose: bool,

    /// Skip winding-consistency pass
    #[arg(long)]
    pub no_orient: bool,

    /// Skip the vertex debug listing
    #[arg(long)]
    pub no_listing: bool,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl From<CliArgs> for ImportConfig {
    fn from(args: CliArgs) -> Self {
        ImportConfig {
            input: args.input,
            output: args.output,
            cleanup: CleanupConfig {
                merge_threshold: args.merge_threshold,
                remove_loose: !args.keep_loose,
                orient_normals: !args.no_orient,
            },
            listing: !args.no_listing,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cleanup_config() {
        let cc = CleanupConfig::default();
        assert!((cc.merge_threshold - 0.001).abs() < f64::EPSILON);
        assert!(cc.remove_loose);
        assert!(cc.orient_normals);
    }

    #[test]
    fn cli_args_to_import_config() {
        let args = CliArgs::parse_from([
            "csv-mesh",
            "-i",
            "capture.csv",
            "-o",
            "./out",
            "--merge-threshold",
            "0.01",
            "--keep-loose",
            "--no-orient",
            "--no-listing",
            "-v",
        ]);

        let config: ImportConfig = args.into();

        assert_eq!(config.input, PathBuf::from("capture.csv"));
        assert_eq!(config.output, PathBuf::from("./out"));
        assert!((config.cleanup.merge_threshold - 0.01).abs() < f64::EPSILON);
        assert!(!config.cleanup.remove_loose);
        assert!(!config.cleanup.orient_normals);
        assert!(!config.listing);
        assert!(config.verbose);
    }

    #[test]
    fn cli_args_minimal() {
        let args = CliArgs::parse_from(["csv-mesh", "-i", "points.csv", "-o", "output"]);
        let config: ImportConfig = args.into();

        assert_eq!(config.input, PathBuf::from("points.csv"));
        assert_eq!(config.output, PathBuf::from("output"));
        assert!((config.cleanup.merge_threshold - 0.001).abs() < f64::EPSILON);
        assert!(config.cleanup.remove_loose);
        assert!(config.cleanup.orient_normals);
        assert!(config.listing);
        assert!(!config.verbose);
    }
}
