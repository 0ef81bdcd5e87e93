//! Name resolution for a single resource type.
//!
//! Resolution ties the pieces together:
//!
//! 1. Look up the type's constraint
//! 2. Pick the slug (only when requested and not in passthrough)
//! 3. Optionally clean every input with the type's clean pattern
//! 4. Compose within the type's length budget, or pass the name through
//! 5. Trim to the maximum length, fold case, and validate

use resname_catalog::Registry;
use tracing::debug;

use crate::clean::{clean_slice, clean_string, matches_accept};
use crate::compose::{Component, Composition, DEFAULT_PRECEDENCE};
use crate::error::NamingError;

/// Per-call inputs to [`resolve_name`].
#[derive(Debug, Clone, Copy)]
pub struct NameParams<'a> {
    /// Joins name components.
    pub separator: &'a str,
    /// Prefixes in output order.
    pub prefixes: &'a [String],
    /// Base name.
    pub name: &'a str,
    /// Suffixes in output order.
    pub suffixes: &'a [String],
    /// Pre-generated random suffix (empty to omit).
    pub random_suffix: &'a str,
    /// Strip characters the resource type does not allow.
    pub clean_input: bool,
    /// Use `name` as-is instead of composing.
    pub passthrough: bool,
    /// Include the resource type's slug.
    pub use_slug: bool,
    /// Order in which components are offered the length budget.
    pub precedence: &'a [Component],
}

impl Default for NameParams<'_> {
    fn default() -> Self {
        Self {
            separator: "-",
            prefixes: &[],
            name: "",
            suffixes: &[],
            random_suffix: "",
            clean_input: true,
            passthrough: false,
            use_slug: true,
            precedence: &DEFAULT_PRECEDENCE,
        }
    }
}

/// Generates a validated name for `resource_type`.
pub fn resolve_name(
    registry: &Registry,
    resource_type: &str,
    params: &NameParams<'_>,
) -> Result<String, NamingError> {
    let constraint = registry.lookup(resource_type)?;

    let slug = if params.use_slug && !params.passthrough {
        constraint.slug()
    } else {
        ""
    };

    let cleaner = params.clean_input.then_some(constraint);
    let prefixes = clean_slice(params.prefixes, cleaner);
    let suffixes = clean_slice(params.suffixes, cleaner);
    let name = clean_string(params.name, cleaner);
    let separator = clean_string(params.separator, cleaner);
    let random = clean_string(params.random_suffix, cleaner);

    let composed = if params.passthrough {
        name
    } else {
        Composition {
            separator: &separator,
            prefixes: &prefixes,
            name: &name,
            slug,
            suffixes: &suffixes,
            random: &random,
            max_length: constraint.max_length(),
            precedence: params.precedence,
        }
        .compose()
    };

    let mut candidate = truncate_chars(&composed, constraint.max_length()).to_string();
    if constraint.lowercase_only() {
        candidate = candidate.to_lowercase();
    }

    if !matches_accept(&candidate, constraint) {
        debug!(
            resource_type = constraint.type_id(),
            candidate = %candidate,
            "generated name rejected by validation pattern"
        );
        return Err(NamingError::ValidationFailed {
            resource_type: constraint.type_id().to_string(),
            candidate,
            pattern: constraint.accept_pattern_str().to_string(),
        });
    }

    debug!(
        resource_type = constraint.type_id(),
        passthrough = params.passthrough,
        name = %candidate,
        "resolved name"
    );
    Ok(candidate)
}

/// Returns the first `max` characters of `s`.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
