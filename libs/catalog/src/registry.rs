//! The resource definition registry.
//!
//! The registry is built once from a list of definitions and is read-only
//! afterwards. Lookups resolve canonical type ids first and fall back to an
//! alias index built from each definition's `alias` and `slug`.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::definition::{ResourceConstraint, ResourceDefinition};
use crate::error::CatalogError;

/// Catalog shipped with the crate.
const BUILTIN_CATALOG: &str = include_str!("../data/resource_definitions.json");

/// Immutable registry of resource constraints.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Constraints in catalog order.
    constraints: Vec<ResourceConstraint>,

    /// Canonical type id -> index into `constraints`.
    by_type: HashMap<String, usize>,

    /// Alias or slug -> index into `constraints`.
    by_alias: HashMap<String, usize>,
}

impl Registry {
    /// Builds a registry, compiling every definition and indexing aliases.
    pub fn from_definitions<I>(definitions: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = ResourceDefinition>,
    {
        let mut constraints = Vec::new();
        let mut by_type = HashMap::new();

        for def in definitions {
            let constraint = ResourceConstraint::compile(&def)?;
            if by_type.contains_key(constraint.type_id()) {
                return Err(CatalogError::InvalidDefinition {
                    resource_type: def.name,
                    reason: "duplicate resource type".to_string(),
                });
            }
            by_type.insert(constraint.type_id().to_string(), constraints.len());
            constraints.push(constraint);
        }

        let mut by_alias = HashMap::new();
        for (idx, constraint) in constraints.iter().enumerate() {
            let short_forms = constraint
                .alias()
                .into_iter()
                .chain(std::iter::once(constraint.slug()))
                .filter(|s| !s.is_empty());

            for short in short_forms {
                if by_type.contains_key(short) {
                    continue;
                }
                match by_alias.get(short).copied() {
                    Some(kept_idx) if kept_idx != idx => {
                        let kept: &ResourceConstraint = &constraints[kept_idx];
                        debug!(
                            alias = short,
                            kept = kept.type_id(),
                            ignored = constraint.type_id(),
                            "alias already registered"
                        );
                    }
                    Some(_) => {}
                    None => {
                        by_alias.insert(short.to_string(), idx);
                    }
                }
            }
        }

        debug!(
            resource_types = constraints.len(),
            aliases = by_alias.len(),
            "resource registry built"
        );

        Ok(Self {
            constraints,
            by_type,
            by_alias,
        })
    }

    /// Builds a registry from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<ResourceDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(definitions)
    }

    /// Returns the process-wide registry built from the bundled catalog.
    ///
    /// The catalog is parsed and compiled on first use only.
    pub fn builtin() -> Result<&'static Registry, CatalogError> {
        static BUILTIN: OnceLock<Result<Registry, CatalogError>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Registry::from_json(BUILTIN_CATALOG))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Looks up a constraint by type id, then by alias.
    ///
    /// Matching is exact and case-sensitive.
    pub fn lookup(&self, resource_type: &str) -> Result<&ResourceConstraint, CatalogError> {
        self.by_type
            .get(resource_type)
            .or_else(|| self.by_alias.get(resource_type))
            .map(|&idx| &self.constraints[idx])
            .ok_or_else(|| CatalogError::not_found(resource_type))
    }

    /// Returns true if the identifier resolves to a constraint.
    pub fn contains(&self, resource_type: &str) -> bool {
        self.by_type.contains_key(resource_type) || self.by_alias.contains_key(resource_type)
    }

    /// Number of resource types.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns true if the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Iterates over constraints in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceConstraint> {
        self.constraints.iter()
    }

    /// Iterates over canonical type ids in catalog order.
    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.constraints.iter().map(|c| c.type_id())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::definition::Scope;

    fn def(name: &str, alias: Option<&str>, slug: &str) -> ResourceDefinition {
        ResourceDefinition {
            name: name.to_string(),
            alias: alias.map(str::to_string),
            slug: slug.to_string(),
            min_length: 1,
            max_length: 63,
            lowercase: false,
            regex: "[^0-9A-Za-z-]".to_string(),
            validation_regex: "^[a-zA-Z0-9-]{1,63}$".to_string(),
            dashes: true,
            scope: Scope::ResourceGroup,
        }
    }

    fn sample() -> Registry {
        Registry::from_definitions(vec![
            def("azurerm_resource_group", Some("azrg"), "rg"),
            def("azurerm_linux_virtual_machine", None, "vm"),
            def("azurerm_windows_virtual_machine", None, "vm"),
            def("general", None, ""),
        ])
        .unwrap()
    }

    #[rstest]
    #[case::type_id("azurerm_resource_group", "azurerm_resource_group")]
    #[case::explicit_alias("azrg", "azurerm_resource_group")]
    #[case::slug("rg", "azurerm_resource_group")]
    #[case::first_slug_wins("vm", "azurerm_linux_virtual_machine")]
    #[case::no_slug("general", "general")]
    fn test_lookup_resolves(#[case] id: &str, #[case] expected: &str) {
        let registry = sample();
        assert_eq!(registry.lookup(id).unwrap().type_id(), expected);
    }

    #[rstest]
    #[case::unknown("not_a_real_type")]
    #[case::case_sensitive("AZURERM_RESOURCE_GROUP")]
    #[case::prefix_only("azurerm_resource")]
    #[case::empty("")]
    fn test_lookup_not_found(#[case] id: &str) {
        let registry = sample();
        let err = registry.lookup(id).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(
            err,
            CatalogError::ResourceTypeNotFound {
                resource_type: id.to_string()
            }
        );
    }

    #[test]
    fn test_alias_never_shadows_type_id() {
        let registry = Registry::from_definitions(vec![
            def("alpha", None, "beta"),
            def("beta", None, "b"),
        ])
        .unwrap();
        assert_eq!(registry.lookup("beta").unwrap().type_id(), "beta");
    }

    #[test]
    fn test_alias_collision_keeps_first_registration() {
        let registry = Registry::from_definitions(vec![
            def("azurerm_virtual_network", None, "vnet"),
            def("azurerm_virtual_network_peering", Some("vnet"), "peer"),
            def("azurerm_subnet", Some("snet"), "snet"),
        ])
        .unwrap();
        assert_eq!(
            registry.lookup("vnet").unwrap().type_id(),
            "azurerm_virtual_network"
        );
        assert_eq!(
            registry.lookup("peer").unwrap().type_id(),
            "azurerm_virtual_network_peering"
        );
        assert_eq!(registry.lookup("snet").unwrap().type_id(), "azurerm_subnet");
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let err = Registry::from_definitions(vec![
            def("azurerm_resource_group", None, "rg"),
            def("azurerm_resource_group", None, "rg"),
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDefinition { .. }));
    }

    #[test]
    fn test_invalid_pattern_reported() {
        let mut bad = def("broken", None, "br");
        bad.validation_regex = "([".to_string();
        let err = Registry::from_definitions(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { .. }));
    }

    #[test]
    fn test_from_json_parse_error() {
        let err = Registry::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }

    #[test]
    fn test_iteration_in_catalog_order() {
        let registry = sample();
        let ids: Vec<_> = registry.type_ids().collect();
        assert_eq!(
            ids,
            vec![
                "azurerm_resource_group",
                "azurerm_linux_virtual_machine",
                "azurerm_windows_virtual_machine",
                "general",
            ]
        );
        assert_eq!(registry.len(), 4);
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let registry = Registry::builtin().unwrap();
        assert!(registry.len() > 20);
        assert!(registry.contains("azurerm_resource_group"));
        assert!(registry.contains("rg"));
        assert!(registry.contains("st"));
    }

    #[test]
    fn test_builtin_catalog_is_shared() {
        let a = Registry::builtin().unwrap();
        let b = Registry::builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_builtin_catalog_every_type_has_accept_pattern() {
        let registry = Registry::builtin().unwrap();
        for constraint in registry.iter() {
            assert!(
                constraint.accept_pattern().is_some(),
                "{} has no validation pattern",
                constraint.type_id()
            );
            assert!(constraint.min_length() <= constraint.max_length());
        }
    }

    #[test]
    fn test_registry_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
