//! Declarative name requests.
//!
//! A [`NameRequest`] mirrors the fields a configuration surface exposes:
//! one name, optional prefixes and suffixes, one or more resource types,
//! and the knobs controlling cleaning, slugs and the random suffix. Every
//! requested type shares the same random suffix so a set of related names
//! stays recognisable.

use std::collections::BTreeMap;

use resname_catalog::Registry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::compose::DEFAULT_PRECEDENCE;
use crate::error::NamingError;
use crate::random::random_suffix;
use crate::resolve::{resolve_name, NameParams};
use crate::validate::validate_resource_types;

/// Default component separator.
pub const DEFAULT_SEPARATOR: &str = "-";

/// A request to generate names for one or more resource types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameRequest {
    /// Base name.
    pub name: String,

    /// Resource type whose name is returned as `result`.
    pub resource_type: String,

    /// Resource types whose names are returned in `results`.
    pub resource_types: Vec<String>,

    /// Prefixes in output order.
    pub prefixes: Vec<String>,

    /// Suffixes in output order.
    pub suffixes: Vec<String>,

    /// Joins name components.
    pub separator: String,

    /// Length of the random suffix (0 for none).
    pub random_length: i64,

    /// Seed for the random suffix; 0 means "pick one".
    pub random_seed: i64,

    /// Strip characters the resource type does not allow.
    pub clean_input: bool,

    /// Use `name` as-is instead of composing.
    pub passthrough: bool,

    /// Include the resource type's slug.
    pub use_slug: bool,
}

impl Default for NameRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            resource_type: String::new(),
            resource_types: Vec::new(),
            prefixes: Vec::new(),
            suffixes: Vec::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            random_length: 0,
            random_seed: 0,
            clean_input: true,
            passthrough: false,
            use_slug: true,
        }
    }
}

/// Names produced for a [`NameRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedNames {
    /// Name for `resource_type` (empty if none was requested).
    pub result: String,

    /// Names for each of `resource_types`, keyed by the requested id.
    pub results: BTreeMap<String, String>,

    /// The random suffix shared by every name.
    pub random_string: String,

    /// Seed actually used; replaying it reproduces the same names.
    pub random_seed: i64,
}

impl NameRequest {
    /// Creates a request for a single resource type.
    pub fn new(resource_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Seed used for the random suffix.
    ///
    /// A zero seed is replaced with one derived from the current time.
    pub fn effective_seed(&self) -> i64 {
        if self.random_seed != 0 {
            return self.random_seed;
        }
        match chrono::Utc::now().timestamp_micros() {
            0 => 1,
            seed => seed,
        }
    }

    /// Generates every requested name.
    pub fn generate(&self, registry: &Registry) -> Result<GeneratedNames, NamingError> {
        validate_resource_types(registry, &self.resource_type, &self.resource_types)?;

        let seed = self.effective_seed();
        let random_string = random_suffix(self.random_length, seed);

        let params = NameParams {
            separator: &self.separator,
            prefixes: &self.prefixes,
            name: &self.name,
            suffixes: &self.suffixes,
            random_suffix: &random_string,
            clean_input: self.clean_input,
            passthrough: self.passthrough,
            use_slug: self.use_slug,
            precedence: &DEFAULT_PRECEDENCE,
        };

        let result = if self.resource_type.is_empty() {
            String::new()
        } else {
            resolve_name(registry, &self.resource_type, &params)?
        };

        let mut results = BTreeMap::new();
        for resource_type in self.resource_types.iter().filter(|t| !t.is_empty()) {
            let name = resolve_name(registry, resource_type, &params)?;
            results.insert(resource_type.clone(), name);
        }

        debug!(
            resource_type = %self.resource_type,
            resource_types = self.resource_types.len(),
            random_seed = seed,
            "generated names"
        );

        Ok(GeneratedNames {
            result,
            results,
            random_string,
            random_seed: seed,
        })
    }
}
