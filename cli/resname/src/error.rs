//! Error display for the CLI.

use colored::Colorize;
use resname_catalog::CatalogError;
use resname_naming::NamingError;

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "caused by:".dimmed(), cause);
    }

    if let Some(hint) = hint_for(err) {
        eprintln!("\n{}", format!("Hint: {hint}").yellow());
    }
}

/// Suggest a next step for known error kinds.
fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let catalog_hint = |e: &CatalogError| match e {
        CatalogError::ResourceTypeNotFound { .. } => {
            Some("Run `resname types list` to see the available resource types.")
        }
        CatalogError::InvalidPattern { .. }
        | CatalogError::InvalidDefinition { .. }
        | CatalogError::Parse { .. } => {
            Some("The resource catalog is invalid. Check RESNAME_CATALOG or the `catalog` setting.")
        }
    };

    if let Some(naming_err) = err.downcast_ref::<NamingError>() {
        return match naming_err {
            NamingError::Catalog(e) => catalog_hint(e),
            NamingError::ValidationFailed { .. } => Some(
                "Enable input cleaning (drop --no-clean-input) or change the name to fit the pattern.",
            ),
            NamingError::EmptyTypeSelection => {
                Some("Pass --resource-type or at least one --resource-types value.")
            }
            NamingError::InvalidResourceTypes { .. } => {
                Some("Run `resname types list` to see the available resource types.")
            }
            NamingError::UnknownComponent(_) => None,
        };
    }

    err.downcast_ref::<CatalogError>().and_then(catalog_hint)
}
