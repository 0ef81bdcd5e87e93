//! Resource type validation command.

use anyhow::Result;
use clap::Args;
use resname_naming::validate_resource_types;

use crate::output::{print_single, print_success, OutputFormat};

use super::CommandContext;

/// Check that resource types exist in the catalog.
#[derive(Debug, Args)]
pub struct ValidateTypesCommand {
    /// Single resource type to check.
    #[arg(long, short = 't', default_value = "")]
    resource_type: String,

    /// Resource types to check.
    resource_types: Vec<String>,
}

impl ValidateTypesCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let registry = ctx.config.registry()?;
        validate_resource_types(&registry, &self.resource_type, &self.resource_types)?;

        let count = std::iter::once(&self.resource_type)
            .chain(&self.resource_types)
            .filter(|t| !t.is_empty())
            .count();

        match ctx.format {
            OutputFormat::Json => print_single(&serde_json::json!({
                "valid": true,
                "checked": count,
            })),
            OutputFormat::Table => print_success(&format!("{count} resource type(s) are valid")),
        }

        Ok(())
    }
}
