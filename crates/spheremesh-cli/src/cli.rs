//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Cube-sphere mesh asset generator command-line arguments.
///
/// CLI values override settings loaded from `spheremesh.ron`.
#[derive(Parser, Debug)]
#[command(name = "spheremesh", about = "Cube-sphere mesh asset generator")]
pub struct CliArgs {
    /// Level of detail: grid subdivisions per cube face edge.
    #[arg(long)]
    pub level_of_detail: Option<u32>,

    /// Output file path (default: <exe dir>/../resources/spheremesh.txt).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (no config file is used when omitted).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(lod) = args.level_of_detail {
            self.mesh.level_of_detail = lod;
        }
        if let Some(ref path) = args.output {
            self.output.path = Some(path.clone());
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
