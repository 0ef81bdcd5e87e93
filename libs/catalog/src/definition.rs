//! Resource definitions and their compiled naming constraints.
//!
//! A [`ResourceDefinition`] is the persisted catalog record. A
//! [`ResourceConstraint`] is the same record with its patterns compiled,
//! ready to be used by the naming engine.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, PatternKind};

// =============================================================================
// Persisted form
// =============================================================================

/// Scope in which a generated name must be unique.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Scope {
    /// Unique across the whole cloud (typically DNS-backed names).
    Global,
    /// Unique within a subscription.
    Subscription,
    /// Unique within a resource group.
    #[default]
    ResourceGroup,
    /// Unique within the parent resource.
    Parent,
    /// Unique within a region.
    Region,
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Scope::Global => "global",
            Scope::Subscription => "subscription",
            Scope::ResourceGroup => "resourceGroup",
            Scope::Parent => "parent",
            Scope::Region => "region",
        };
        f.write_str(s)
    }
}

/// A resource definition as stored in the catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceDefinition {
    /// Canonical resource type identifier.
    pub name: String,

    /// Optional short identifier resolving to the same definition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Short tag inserted into generated names.
    #[serde(default)]
    pub slug: String,

    /// Inclusive lower bound on the generated name's length.
    #[serde(default)]
    pub min_length: usize,

    /// Inclusive upper bound on the generated name's length.
    pub max_length: usize,

    /// Fold the generated name to lowercase.
    #[serde(default)]
    pub lowercase: bool,

    /// Characters matching this pattern are removed from inputs.
    #[serde(default)]
    pub regex: String,

    /// The generated name must match this pattern.
    #[serde(default)]
    pub validation_regex: String,

    /// Whether the type tolerates dashes. Informational.
    #[serde(default)]
    pub dashes: bool,

    /// Uniqueness scope. Informational.
    #[serde(default)]
    pub scope: Scope,
}

// =============================================================================
// Compiled form
// =============================================================================

/// Naming constraints for one resource type, with patterns compiled.
///
/// Constraints are immutable once built.
#[derive(Debug, Clone)]
pub struct ResourceConstraint {
    type_id: String,
    alias: Option<String>,
    slug: String,
    min_length: usize,
    max_length: usize,
    lowercase: bool,
    allow_dashes: bool,
    scope: Scope,
    clean_pattern: Option<Regex>,
    accept_pattern: Option<Regex>,
}

impl ResourceConstraint {
    /// Compiles a definition into a constraint.
    pub fn compile(def: &ResourceDefinition) -> Result<Self, CatalogError> {
        if def.name.is_empty() {
            return Err(CatalogError::InvalidDefinition {
                resource_type: String::new(),
                reason: "resource type name cannot be empty".to_string(),
            });
        }

        if def.min_length > def.max_length {
            return Err(CatalogError::InvalidDefinition {
                resource_type: def.name.clone(),
                reason: format!(
                    "min_length {} exceeds max_length {}",
                    def.min_length, def.max_length
                ),
            });
        }

        Ok(Self {
            type_id: def.name.clone(),
            alias: def.alias.clone().filter(|a| !a.is_empty()),
            slug: def.slug.clone(),
            min_length: def.min_length,
            max_length: def.max_length,
            lowercase: def.lowercase,
            allow_dashes: def.dashes,
            scope: def.scope,
            clean_pattern: compile_pattern(&def.name, PatternKind::Clean, &def.regex)?,
            accept_pattern: compile_pattern(
                &def.name,
                PatternKind::Accept,
                &def.validation_regex,
            )?,
        })
    }

    /// Canonical resource type identifier.
    pub fn type_id(&self) -> &str {
        &self.type_id
    }

    /// Optional short alias.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Slug for this type (may be empty).
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Minimum name length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }

    /// Maximum name length.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Whether names are folded to lowercase.
    pub fn lowercase_only(&self) -> bool {
        self.lowercase
    }

    /// Whether the type tolerates dashes.
    pub fn allow_dashes(&self) -> bool {
        self.allow_dashes
    }

    /// Uniqueness scope.
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Compiled clean pattern, if one is configured.
    pub fn clean_pattern(&self) -> Option<&Regex> {
        self.clean_pattern.as_ref()
    }

    /// Compiled validation pattern, if one is configured.
    pub fn accept_pattern(&self) -> Option<&Regex> {
        self.accept_pattern.as_ref()
    }

    /// Source text of the validation pattern (empty if none).
    pub fn accept_pattern_str(&self) -> &str {
        self.accept_pattern.as_ref().map_or("", |r| r.as_str())
    }

    /// Source text of the clean pattern (empty if none).
    pub fn clean_pattern_str(&self) -> &str {
        self.clean_pattern.as_ref().map_or("", |r| r.as_str())
    }

    /// Converts back into the persisted form.
    pub fn to_definition(&self) -> ResourceDefinition {
        ResourceDefinition {
            name: self.type_id.clone(),
            alias: self.alias.clone(),
            slug: self.slug.clone(),
            min_length: self.min_length,
            max_length: self.max_length,
            lowercase: self.lowercase,
            regex: self.clean_pattern_str().to_string(),
            validation_regex: self.accept_pattern_str().to_string(),
            dashes: self.allow_dashes,
            scope: self.scope,
        }
    }
}

/// Compiles a pattern; an empty pattern means "not configured".
fn compile_pattern(
    resource_type: &str,
    kind: PatternKind,
    pattern: &str,
) -> Result<Option<Regex>, CatalogError> {
    if pattern.is_empty() {
        return Ok(None);
    }

    Regex::new(pattern)
        .map(Some)
        .map_err(|e| CatalogError::InvalidPattern {
            resource_type: resource_type.to_string(),
            kind,
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_account() -> ResourceDefinition {
        ResourceDefinition {
            name: "azurerm_storage_account".to_string(),
            alias: None,
            slug: "st".to_string(),
            min_length: 3,
            max_length: 24,
            lowercase: true,
            regex: "[^0-9a-z]".to_string(),
            validation_regex: "^[a-z0-9]{3,24}$".to_string(),
            dashes: false,
            scope: Scope::Global,
        }
    }

    #[test]
    fn test_compile_valid_definition() {
        let constraint = ResourceConstraint::compile(&storage_account()).unwrap();
        assert_eq!(constraint.type_id(), "azurerm_storage_account");
        assert_eq!(constraint.slug(), "st");
        assert_eq!(constraint.max_length(), 24);
        assert!(constraint.lowercase_only());
        assert!(constraint.clean_pattern().is_some());
        assert_eq!(constraint.accept_pattern_str(), "^[a-z0-9]{3,24}$");
    }

    #[test]
    fn test_compile_empty_patterns_are_unconfigured() {
        let mut def = storage_account();
        def.regex.clear();
        def.validation_regex.clear();

        let constraint = ResourceConstraint::compile(&def).unwrap();
        assert!(constraint.clean_pattern().is_none());
        assert!(constraint.accept_pattern().is_none());
        assert_eq!(constraint.accept_pattern_str(), "");
    }

    #[test]
    fn test_compile_invalid_clean_pattern() {
        let mut def = storage_account();
        def.regex = "[a-z".to_string();

        let err = ResourceConstraint::compile(&def).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidPattern {
                kind: PatternKind::Clean,
                ..
            }
        ));
        assert!(err.is_configuration_error());
        assert!(err.to_string().contains("azurerm_storage_account"));
    }

    #[test]
    fn test_compile_invalid_accept_pattern() {
        let mut def = storage_account();
        def.validation_regex = "^(abc$".to_string();

        let err = ResourceConstraint::compile(&def).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidPattern {
                kind: PatternKind::Accept,
                ..
            }
        ));
    }

    #[test]
    fn test_compile_rejects_inverted_bounds() {
        let mut def = storage_account();
        def.min_length = 30;

        let err = ResourceConstraint::compile(&def).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_empty_alias_is_ignored() {
        let mut def = storage_account();
        def.alias = Some(String::new());

        let constraint = ResourceConstraint::compile(&def).unwrap();
        assert_eq!(constraint.alias(), None);
    }

    #[test]
    fn test_definition_json_defaults() {
        let json = r#"{"name": "general", "max_length": 250}"#;
        let def: ResourceDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.min_length, 0);
        assert_eq!(def.slug, "");
        assert!(!def.lowercase);
        assert_eq!(def.scope, Scope::ResourceGroup);
    }

    #[test]
    fn test_to_definition_preserves_fields() {
        let def = storage_account();
        let constraint = ResourceConstraint::compile(&def).unwrap();
        assert_eq!(constraint.to_definition(), def);
    }
}
