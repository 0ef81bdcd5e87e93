//! Error types for catalog loading and lookup.

use thiserror::Error;

/// Errors that can occur when building or querying the resource registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No resource definition is registered under this identifier.
    #[error("resource type '{resource_type}' not found")]
    ResourceTypeNotFound { resource_type: String },

    /// A clean or validation pattern failed to compile.
    #[error("invalid {kind} pattern for resource type '{resource_type}': '{pattern}': {message}")]
    InvalidPattern {
        resource_type: String,
        kind: PatternKind,
        pattern: String,
        message: String,
    },

    /// A definition is structurally invalid (bounds, duplicate id).
    #[error("invalid definition for resource type '{resource_type}': {reason}")]
    InvalidDefinition {
        resource_type: String,
        reason: String,
    },

    /// The catalog document could not be parsed.
    #[error("failed to parse resource catalog: {message}")]
    Parse { message: String },
}

impl CatalogError {
    /// Returns true if this error indicates an unknown resource type.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::ResourceTypeNotFound { .. })
    }

    /// Returns true if this error is a configuration defect in the catalog
    /// rather than a caller mistake.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            CatalogError::InvalidPattern { .. }
                | CatalogError::InvalidDefinition { .. }
                | CatalogError::Parse { .. }
        )
    }

    pub(crate) fn not_found(resource_type: &str) -> Self {
        CatalogError::ResourceTypeNotFound {
            resource_type: resource_type.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse {
            message: e.to_string(),
        }
    }
}

/// Which of a definition's two patterns an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Characters matching this pattern are removed from inputs.
    Clean,
    /// The final name must match this pattern.
    Accept,
}

impl std::fmt::Display for PatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PatternKind::Clean => write!(f, "clean"),
            PatternKind::Accept => write!(f, "validation"),
        }
    }
}
