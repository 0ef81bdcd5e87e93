//! Name generation command.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use resname_naming::{GeneratedNames, NameRequest};
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use crate::config::Config;
use crate::output::{print_info, print_output, print_single, OutputFormat};

use super::CommandContext;

/// Generate names for one or more resource types.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Request file (JSON). Flags given alongside override its fields.
    #[arg(long, value_name = "PATH")]
    request: Option<PathBuf>,

    /// Base name.
    #[arg(long, short = 'n')]
    name: Option<String>,

    /// Resource type (or alias) whose name is printed as the result.
    #[arg(long, short = 't')]
    resource_type: Option<String>,

    /// Additional resource types (comma-separated or repeated).
    #[arg(long, value_delimiter = ',')]
    resource_types: Vec<String>,

    /// Prefixes, in output order (comma-separated or repeated).
    #[arg(long, value_delimiter = ',')]
    prefixes: Vec<String>,

    /// Suffixes, in output order (comma-separated or repeated).
    #[arg(long, value_delimiter = ',')]
    suffixes: Vec<String>,

    /// Separator between name components.
    #[arg(long)]
    separator: Option<String>,

    /// Length of the random suffix.
    #[arg(long)]
    random_length: Option<i64>,

    /// Seed for the random suffix (0 picks one).
    #[arg(long, allow_hyphen_values = true)]
    random_seed: Option<i64>,

    /// Keep characters the resource type does not allow.
    #[arg(long)]
    no_clean_input: bool,

    /// Use the name as-is instead of composing it.
    #[arg(long)]
    passthrough: bool,

    /// Leave the resource type's slug out of the name.
    #[arg(long)]
    no_slug: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct NameRow {
    resource_type: String,
    name: String,
}

impl GenerateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let registry = ctx.config.registry()?;
        let request = self.into_request(&ctx)?;

        let names = request.generate(&registry)?;
        info!(
            random_seed = names.random_seed,
            results = names.results.len(),
            "names generated"
        );

        print_names(&names, ctx.format);
        Ok(())
    }

    /// Builds the request from config defaults, the optional file and flags,
    /// later sources overriding earlier ones.
    fn into_request(self, ctx: &CommandContext) -> Result<NameRequest> {
        let mut request = match &self.request {
            Some(path) => read_request(path, &ctx.config)?,
            None => NameRequest {
                separator: ctx.config.separator.clone(),
                ..NameRequest::default()
            },
        };

        if let Some(name) = self.name {
            request.name = name;
        }
        if let Some(resource_type) = self.resource_type {
            request.resource_type = resource_type;
        }
        if !self.resource_types.is_empty() {
            request.resource_types = self.resource_types;
        }
        if !self.prefixes.is_empty() {
            request.prefixes = self.prefixes;
        }
        if !self.suffixes.is_empty() {
            request.suffixes = self.suffixes;
        }
        if let Some(separator) = self.separator {
            request.separator = separator;
        }
        if let Some(length) = self.random_length {
            request.random_length = length;
        }
        if let Some(seed) = self.random_seed {
            request.random_seed = seed;
        }
        if self.no_clean_input {
            request.clean_input = false;
        }
        if self.passthrough {
            request.passthrough = true;
        }
        if self.no_slug {
            request.use_slug = false;
        }

        Ok(request)
    }
}

/// Reads a request file. Fields it leaves out fall back to the config.
fn read_request(path: &Path, config: &Config) -> Result<NameRequest> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read request from {:?}", path))?;
    let mut value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse request from {:?}", path))?;

    if let Some(fields) = value.as_object_mut() {
        fields
            .entry("separator")
            .or_insert_with(|| config.separator.clone().into());
    }

    serde_json::from_value(value)
        .with_context(|| format!("Failed to parse request from {:?}", path))
}

fn print_names(names: &GeneratedNames, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_single(names),
        OutputFormat::Table => {
            if !names.result.is_empty() {
                println!("{}", names.result);
            }
            if !names.results.is_empty() {
                let rows: Vec<NameRow> = names
                    .results
                    .iter()
                    .map(|(resource_type, name)| NameRow {
                        resource_type: resource_type.clone(),
                        name: name.clone(),
                    })
                    .collect();
                print_output(&rows, format);
            }
            if !names.random_string.is_empty() {
                print_info(&format!(
                    "random_string: {} (seed {})",
                    names.random_string, names.random_seed
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        generate: GenerateCommand,
    }

    fn context(separator: &str) -> CommandContext {
        CommandContext {
            config: Config {
                separator: separator.to_string(),
                ..Config::default()
            },
            format: OutputFormat::Json,
        }
    }

    fn request_from(args: &[&str], ctx: &CommandContext) -> NameRequest {
        let cli = TestCli::try_parse_from(std::iter::once("generate").chain(args.iter().copied()))
            .unwrap();
        cli.generate.into_request(ctx).unwrap()
    }

    fn write_request(dir: &tempfile::TempDir, body: &str) -> String {
        let path = dir.path().join("request.json");
        fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_config_separator_without_request_file() {
        let req = request_from(&["-n", "app", "-t", "rg"], &context("_"));
        assert_eq!(req.separator, "_");
        assert_eq!(req.name, "app");
        assert_eq!(req.resource_type, "rg");
    }

    #[test]
    fn test_request_file_falls_back_to_config_separator() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_request(
            &dir,
            r#"{"name": "app", "resource_type": "azurerm_resource_group"}"#,
        );

        let req = request_from(&["--request", &path], &context("_"));
        assert_eq!(req.separator, "_");
        assert_eq!(req.name, "app");
        assert!(req.clean_input);
        assert!(req.use_slug);
    }

    #[test]
    fn test_request_file_separator_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_request(&dir, r#"{"name": "app", "separator": "."}"#);

        let req = request_from(&["--request", &path], &context("_"));
        assert_eq!(req.separator, ".");
    }

    #[test]
    fn test_flags_override_request_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_request(
            &dir,
            r#"{"name": "app", "separator": ".", "prefixes": ["dev"], "random_seed": 5}"#,
        );

        let req = request_from(
            &[
                "--request",
                &path,
                "--separator",
                "~",
                "--name",
                "api",
                "--prefixes",
                "prod,eu",
                "--random-seed",
                "-3",
                "--no-slug",
            ],
            &context("_"),
        );
        assert_eq!(req.separator, "~");
        assert_eq!(req.name, "api");
        assert_eq!(req.prefixes, vec!["prod".to_string(), "eu".to_string()]);
        assert_eq!(req.random_seed, -3);
        assert!(!req.use_slug);
    }

    #[test]
    fn test_invalid_request_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_request(&dir, "name = 'app'");

        let cli = TestCli::try_parse_from(["generate", "--request", path.as_str()]).unwrap();
        let err = cli.generate.into_request(&context("-")).unwrap_err();
        assert!(err.to_string().contains("Failed to parse request"));
    }
}
