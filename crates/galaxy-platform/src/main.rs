//! galaxy-platformd - Galaxy platform bring-up tool.
//!
//! Builds the platform object for a board variant, initializes the port
//! map, and reports it. This is the same sequence the switch agent runs at
//! start-up, packaged as a standalone binary for bench bring-up and
//! debugging.

use std::process::ExitCode;
use std::str::FromStr;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use galaxy_platform::GalaxyPlatform;
use galaxy_types::PlatformMode;

/// Galaxy platform bring-up tool.
#[derive(Debug, Parser)]
#[command(name = "galaxy-platformd", version, about)]
struct Args {
    /// Board variant to bring up (galaxy-lc or galaxy-fc). Falls back to
    /// the PLATFORM_MODE environment variable.
    #[arg(long)]
    mode: Option<String>,

    /// Dump the port map as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// Initializes tracing/logging.
fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Resolves the board mode from the command line or environment.
fn board_mode(args: &Args) -> anyhow::Result<PlatformMode> {
    let raw = match &args.mode {
        Some(mode) => mode.clone(),
        None => std::env::var("PLATFORM_MODE")
            .context("no --mode flag and PLATFORM_MODE is not set")?,
    };
    PlatformMode::from_str(&raw).with_context(|| format!("unrecognized board mode '{}'", raw))
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mode = board_mode(args)?;

    info!("--- Starting galaxy-platformd ({}) ---", mode);

    let mut platform = GalaxyPlatform::new(mode);
    let port_map = platform.init_ports();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&port_map)?);
    } else {
        for (hw_port, port) in &port_map {
            println!("{:>4}  {}", hw_port.as_u32(), port);
        }
    }

    info!(
        "{} logical ports, {} front-panel transceiver slots",
        port_map.len(),
        platform.num_front_panel_ports()
    );

    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("galaxy-platformd error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
