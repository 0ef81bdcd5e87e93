//! # resname-catalog
//!
//! Resource definitions and the registry that serves them to the naming
//! engine.
//!
//! ## Design Principles
//!
//! - Definitions are data; the registry compiles them once and never mutates
//! - Every pattern is compiled at build time, so a bad pattern is a load error
//! - Lookups are exact and case-sensitive: type id first, then alias or slug
//! - The registry is passed by reference; [`Registry::builtin`] is the single
//!   process-wide initialization point for the bundled catalog
//!
//! ## Catalog Format
//!
//! The catalog is a JSON array of records:
//!
//! ```json
//! [{
//!   "name": "azurerm_storage_account",
//!   "slug": "st",
//!   "min_length": 3,
//!   "max_length": 24,
//!   "lowercase": true,
//!   "regex": "[^0-9a-z]",
//!   "validation_regex": "^[a-z0-9]{3,24}$",
//!   "dashes": false,
//!   "scope": "global"
//! }]
//! ```

mod definition;
mod error;
mod registry;

pub use definition::{ResourceConstraint, ResourceDefinition, Scope};
pub use error::{CatalogError, PatternKind};
pub use registry::Registry;
