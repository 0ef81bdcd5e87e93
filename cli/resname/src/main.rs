//! resname - CLI for composing and validating cloud resource names.
//!
//! Names are built from the bundled resource catalog (or a replacement
//! catalog set in the config file) and checked against each type's rules.

use std::io;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;
use config::Config;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    init_logging(&config.log_level, cli.log_json);
    cli.run(config)
}

/// Logs go to stderr so command output on stdout stays machine-readable.
fn init_logging(level: &str, json: bool) {
    // Prefer RUST_LOG, fall back to the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(io::stderr)
    });
    let text_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
