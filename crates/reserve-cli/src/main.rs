//! Operator CLI for a reserve-backed wrapped token
//!
//! Prints genesis metadata and replays scripted gateway operations against a
//! Merkle inclusion verifier that trusts the script's headers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use reserve_cli::commands::{info, replay};
use reserve_cli::{load_config, ReplayOptions, ReplayScript};
use reserve_core::ReserveConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reserve")]
#[command(about = "Reserve - proof-gated issuance of a wrapped reserve token", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show token metadata, supply cap and genesis controller
    Info,

    /// Replay a JSON script of gateway operations
    Replay {
        /// Script file
        script: PathBuf,

        /// Start from a saved snapshot instead of genesis
        #[arg(long)]
        from_snapshot: Option<PathBuf>,

        /// Save the final state as a snapshot
        #[arg(long)]
        save_snapshot: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose, &config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Info => {
            info::run(&config, &mut out)?;
        }

        Commands::Replay {
            script,
            from_snapshot,
            save_snapshot,
        } => {
            let script = ReplayScript::load(&script)?;
            let options = ReplayOptions {
                from_snapshot: from_snapshot.as_deref(),
                save_snapshot: save_snapshot.as_deref(),
            };
            replay::run(&config, &script, options, &mut out)?;
        }
    }

    Ok(())
}

/// `--verbose` wins, then `RUST_LOG`, then the configured level.
/// Logs go to stderr so stdout stays machine-readable.
fn init_logging(verbose: bool, config: &ReserveConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
