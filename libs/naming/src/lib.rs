//! Resource name generation.
//!
//! This library turns a desired name plus optional prefixes, suffixes and
//! a random component into one string that satisfies a resource type's
//! naming constraints:
//! - Cleaning inputs against the type's allowed characters
//! - Composing components in priority order within the length budget
//! - Deterministic random suffixes from a seed
//! - Final trimming, case folding and validation
//!
//! # Invariants
//!
//! - Every operation is a pure function of its inputs and the registry
//! - The same inputs (including the seed) always yield the same name
//! - A generated name never exceeds the type's maximum length

mod clean;
mod compose;
mod error;
mod random;
mod request;
mod resolve;
mod validate;

pub use clean::{clean_slice, clean_string, matches_accept};
pub use compose::{parse_precedence, Component, Composition, DEFAULT_PRECEDENCE};
pub use error::NamingError;
pub use random::random_suffix;
pub use request::{GeneratedNames, NameRequest, DEFAULT_SEPARATOR};
pub use resolve::{resolve_name, NameParams};
pub use validate::validate_resource_types;

/// Re-export the catalog for consumers that only depend on this crate.
pub use resname_catalog as catalog;
