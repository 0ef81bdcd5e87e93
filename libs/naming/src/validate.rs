//! Resource type selection validation.

use resname_catalog::Registry;

use crate::error::NamingError;

/// Checks that every requested resource type is registered.
///
/// Fails if no type is requested at all. Unknown types are collected and
/// reported together rather than one at a time.
pub fn validate_resource_types<S: AsRef<str>>(
    registry: &Registry,
    resource_type: &str,
    resource_types: &[S],
) -> Result<(), NamingError> {
    if resource_type.is_empty() && resource_types.is_empty() {
        return Err(NamingError::EmptyTypeSelection);
    }

    let missing: Vec<String> = std::iter::once(resource_type)
        .chain(resource_types.iter().map(AsRef::as_ref))
        .filter(|t| !t.is_empty() && !registry.contains(t))
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(NamingError::InvalidResourceTypes {
            resource_types: missing,
        })
    }
}
