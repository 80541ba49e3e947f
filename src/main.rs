use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod commands;
mod config;
mod constants;
mod domain;
mod logging;
mod provider;
mod state;
mod theme;
mod tui;
mod ui;
mod widget;

#[cfg(test)]
mod test_utils;

use crate::config::RuntimeConfig;
use crate::constants::APP_TITLE;
use crate::domain::Network;
use crate::logging::{ErrorReporter, TracingReporter};
use crate::provider::{SimulatedOptions, SimulatedProvider, simulated::DEFAULT_ADDRESS};
use crate::state::{App, AppConfig};

// walletbar version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// walletbar - wallet connect/disconnect for terminal dApps
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Network to open sessions on (overrides the saved preference)
    #[arg(long, value_name = "NETWORK")]
    network: Option<Network>,

    /// Address the simulated wallet connects as
    #[arg(long, value_name = "ADDR", default_value = DEFAULT_ADDRESS)]
    address: String,

    /// Simulated wallet latency for connect and disconnect
    #[arg(long, value_name = "MS", default_value_t = 400)]
    latency_ms: u64,

    /// Make the next N disconnect calls fail
    #[arg(long, value_name = "N", default_value_t = 0)]
    fail_disconnects: u32,

    /// Start with a wallet already connected
    #[arg(long)]
    connected: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    if let Some(Commands::Version) = cli.command {
        println!("walletbar v{VERSION}");
        println!("{APP_TITLE}: wallet connection for terminal dApps");
        return Ok(());
    }

    // Fails before the terminal is touched.
    let runtime = RuntimeConfig::from_env()?;

    if let Err(err) = logging::init() {
        eprintln!("Warning: logging disabled: {err}");
    }
    tracing::info!(
        version = VERSION,
        project_id = %runtime.project_id,
        region = ?runtime.region,
        "Starting walletbar"
    );

    let mut config = AppConfig::load();
    if let Some(network) = cli.network {
        config.network = network;
    }

    let provider = Arc::new(SimulatedProvider::new(SimulatedOptions {
        address: cli.address,
        latency: Duration::from_millis(cli.latency_ms),
        network: config.network,
        start_connected: cli.connected,
    }));
    provider.fail_next_disconnects(cli.fail_disconnects);
    let reporter: Arc<dyn ErrorReporter> = Arc::new(TracingReporter);

    let mut app = App::new(provider, runtime, config, reporter)
        .with_config_path(AppConfig::config_path().ok());

    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;

    tracing::info!("Exiting walletbar");
    result
}
