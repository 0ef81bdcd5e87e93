//! Error types for name generation.

use resname_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while generating or validating a name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// Registry error (unknown type, bad pattern), passed through unchanged.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The generated name does not satisfy the type's validation pattern.
    #[error(
        "invalid name for resource type '{resource_type}': '{candidate}' does not match pattern '{pattern}'"
    )]
    ValidationFailed {
        resource_type: String,
        candidate: String,
        pattern: String,
    },

    /// Neither a single resource type nor a list of types was given.
    #[error("resource_type and resource_types parameters are empty, at least one resource type is required")]
    EmptyTypeSelection,

    /// One or more resource types are not registered.
    #[error("{}", describe_missing(.resource_types))]
    InvalidResourceTypes { resource_types: Vec<String> },

    /// A precedence tag is not one of the known components.
    #[error("unknown name component '{0}' (expected one of: name, slug, random, suffixes, prefixes)")]
    UnknownComponent(String),
}

impl NamingError {
    /// Returns true if this error indicates an unknown resource type.
    pub fn is_not_found(&self) -> bool {
        match self {
            NamingError::Catalog(e) => e.is_not_found(),
            NamingError::InvalidResourceTypes { .. } => true,
            _ => false,
        }
    }

    /// Returns true if the composed name was rejected by validation.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, NamingError::ValidationFailed { .. })
    }
}

fn describe_missing(resource_types: &[String]) -> String {
    resource_types
        .iter()
        .map(|t| format!("resource type '{t}' not found"))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_types_message_lists_every_type() {
        let err = NamingError::InvalidResourceTypes {
            resource_types: vec!["foo".to_string(), "bar".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "resource type 'foo' not found; resource type 'bar' not found"
        );
        assert!(err.is_not_found());
    }

    #[test]
    fn test_catalog_error_is_transparent() {
        let inner = CatalogError::ResourceTypeNotFound {
            resource_type: "nope".to_string(),
        };
        let err = NamingError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert!(err.is_not_found());
        assert!(!err.is_validation_failure());
    }
}
