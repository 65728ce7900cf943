//! Tower loader
//!
//! Reads a tower file, builds every floor, validates portals and
//! teleports, and logs a summary of each floor.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use toroid_floor::{FloorManager, TowerConfig};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Build and validate a tower of toroidal floors
#[derive(Parser, Debug)]
#[command(name = "toroid-tower")]
#[command(about = "Load a tower file, build its floors, and check cross-floor references")]
struct Args {
    /// Tower file (TOML)
    tower: PathBuf,

    /// Log every placed object, not just per-floor totals
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("toroid=info")),
        )
        .init();

    let args = Args::parse();
    let manager = match TowerConfig::load(&args.tower).and_then(|t| FloorManager::init(&t)) {
        Ok(m) => m,
        Err(e) => {
            error!(tower = %args.tower.display(), "{e}");
            return ExitCode::FAILURE;
        }
    };

    for floor in manager.floors() {
        let stats = floor.objects().stats();
        info!(
            floor = floor.name(),
            size = %format!("{}x{}", floor.width(), floor.height()),
            objects = stats.live,
            occupied_cells = stats.occupied_cells,
            "{floor}"
        );
        if args.verbose {
            for (object, pos) in floor.placed() {
                info!(floor = floor.name(), %pos, "{object}");
            }
        }
    }
    info!(start = manager.start_floor().name(), "{manager}");
    ExitCode::SUCCESS
}
