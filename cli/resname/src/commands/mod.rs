//! CLI commands.

mod generate;
mod types;
mod validate;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::output::OutputFormat;

/// resname - Generate cloud resource names that satisfy naming rules.
#[derive(Debug, Parser)]
#[command(name = "resname")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate names for one or more resource types.
    Generate(generate::GenerateCommand),

    /// Check that resource types exist in the catalog.
    ValidateTypes(validate::ValidateTypesCommand),

    /// Inspect the resource catalog.
    Types(types::TypesCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self, config: Config) -> Result<()> {
        let ctx = CommandContext {
            config,
            format: self.format,
        };

        match self.command {
            Commands::Generate(cmd) => cmd.run(ctx),
            Commands::ValidateTypes(cmd) => cmd.run(ctx),
            Commands::Types(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("resname {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub format: OutputFormat,
}
