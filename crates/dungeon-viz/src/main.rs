//! dungeon-viz
//!
//! Prints the ASCII map of a dungeon JSON description.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use dv_core::RenderError;
use dv_load::LoadError;

/// Visualize a dungeon JSON file as ASCII art
#[derive(Parser, Debug)]
#[command(name = "dungeon-viz")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the dungeon JSON file
    json_file: PathBuf,

    /// Log each rendering stage to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

#[derive(Debug, Error)]
enum VizError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args.json_file) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(VizError::Load(LoadError::NotFound(path))) => {
            println!("Error: File {} not found", path.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::debug!(error = ?e, "render failed");
            println!("Error visualizing dungeon: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<String, VizError> {
    let desc = dv_load::load_from_file(path)?;
    Ok(dv_core::render(&desc)?)
}

/// Logs go to stderr so stdout carries only the map.
/// `RUST_LOG` wins over the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "dv_core=debug,dv_load=debug,warn" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
