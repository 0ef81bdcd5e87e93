//! Catalog inspection commands.
//!
//! These commands only read the resource catalog.

use anyhow::Result;
use clap::{Args, Subcommand};
use resname_catalog::ResourceConstraint;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_single, OutputFormat};

use super::CommandContext;

/// Catalog commands.
#[derive(Debug, Args)]
pub struct TypesCommand {
    #[command(subcommand)]
    command: TypesSubcommand,
}

#[derive(Debug, Subcommand)]
enum TypesSubcommand {
    /// List resource types.
    List(ListArgs),

    /// Show the naming rules for one resource type (id or alias).
    Show(ShowArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Only show types whose id or slug contains this text.
    #[arg(long)]
    filter: Option<String>,
}

#[derive(Debug, Args)]
struct ShowArgs {
    /// Resource type id or alias.
    resource_type: String,
}

#[derive(Debug, Serialize, Tabled)]
struct TypeRow {
    resource_type: String,
    slug: String,
    min: usize,
    max: usize,
    lowercase: bool,
    scope: String,
}

impl From<&ResourceConstraint> for TypeRow {
    fn from(c: &ResourceConstraint) -> Self {
        Self {
            resource_type: c.type_id().to_string(),
            slug: c.slug().to_string(),
            min: c.min_length(),
            max: c.max_length(),
            lowercase: c.lowercase_only(),
            scope: c.scope().to_string(),
        }
    }
}

impl TypesCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            TypesSubcommand::List(args) => list(ctx, args),
            TypesSubcommand::Show(args) => show(ctx, args),
        }
    }
}

fn list(ctx: CommandContext, args: ListArgs) -> Result<()> {
    let registry = ctx.config.registry()?;
    let rows: Vec<TypeRow> = registry
        .iter()
        .filter(|c| match &args.filter {
            Some(f) => c.type_id().contains(f.as_str()) || c.slug().contains(f.as_str()),
            None => true,
        })
        .map(TypeRow::from)
        .collect();

    print_output(&rows, ctx.format);
    Ok(())
}

fn show(ctx: CommandContext, args: ShowArgs) -> Result<()> {
    let registry = ctx.config.registry()?;
    let constraint = registry.lookup(&args.resource_type)?;
    let definition = constraint.to_definition();

    match ctx.format {
        OutputFormat::Json => print_single(&definition),
        OutputFormat::Table => {
            println!("resource_type:    {}", definition.name);
            println!("alias:            {}", definition.alias.as_deref().unwrap_or("-"));
            println!("slug:             {}", definition.slug);
            println!(
                "length:           {}..={}",
                definition.min_length, definition.max_length
            );
            println!("lowercase:        {}", definition.lowercase);
            println!("dashes:           {}", definition.dashes);
            println!("scope:            {}", definition.scope);
            println!("clean pattern:    {}", definition.regex);
            println!("validation:       {}", definition.validation_regex);
        }
    }

    Ok(())
}
