//! Binary entry point for the cube-sphere mesh asset generator.
//!
//! Generates the vertex sequence at the configured level of detail and
//! writes it as float literals to the output file, for embedding as a
//! static mesh asset. Run with `--level-of-detail 16` to override the
//! default tessellation.

mod cli;
mod config;
mod logging;

use clap::Parser;
use tracing::info;

use crate::cli::CliArgs;
use crate::config::Config;

fn main() {
    let args = CliArgs::parse();

    let mut config = match &args.config {
        Some(dir) => match Config::load_or_create(dir) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load config: {e}");
                std::process::exit(1);
            }
        },
        None => Config::default(),
    };
    config.apply_cli_overrides(&args);

    logging::init_logging(Some(&config));

    // Resolve the destination once, up front, and pass it explicitly.
    let output_path = match config.output.resolve() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Failed to resolve output path: {e}");
            std::process::exit(1);
        }
    };

    let level = config.mesh.level_of_detail;
    let mesh = spheremesh_geom::generate(level);
    let scalars = mesh.to_scalars();
    info!(
        level_of_detail = level,
        vertices = mesh.vertex_count(),
        scalars = scalars.len(),
        "generated cube-sphere mesh"
    );

    if let Err(e) = spheremesh_asset::write_mesh_asset(&output_path, &scalars) {
        eprintln!("Failed to write mesh asset: {e}");
        std::process::exit(1);
    }
    info!(path = %output_path.display(), "wrote mesh asset");
}
