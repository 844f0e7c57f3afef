//! Negative Countdown Timer - a countdown that keeps going into overtime
//!
//! Counts down from the configured start time, plays a sound at zero,
//! continues into negative time and stops with a second sound at the
//! configured limit.

use anyhow::Result;
use clap::Parser;

use negative_countdown::cli::{print_config, Cli};
use negative_countdown::config::load_config;
use negative_countdown::sound::create_player;
use negative_countdown::view::run_gui;

/// Main entry point
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` is honoured unless `--verbose` asks for debug output.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration and either prints it or opens the window.
fn execute(cli: Cli) -> Result<()> {
    tracing::info!("Reading config from {}", cli.config.display());
    let config = load_config(&cli.config);

    if cli.print_config {
        print_config(&config, &mut std::io::stdout().lock())?;
        return Ok(());
    }

    let sounds = create_player(cli.no_sound);
    run_gui(config, sounds)
}
