//! Tag schema and validation.
//!
//! # Data Flow
//! ```text
//! caller / [tags] table in the config file
//!     → schema.rs (Tags, typed enums)
//!     → validation.rs (every rule checked, all violations collected)
//!     → ValidatedTags (immutable, shared via Arc by formatter and sinks)
//! ```
//!
//! # Design Decisions
//! - Tags are a typed record, not a loose map; absent values are `None` or empty
//! - Validation is a pure function: `&Tags → Vec<ValidationError>`
//! - A logger can only be built from `ValidatedTags`

pub mod schema;
pub mod validation;

pub use schema::{CloudProvider, Condominio, Datacenter, Environment, Tags};
pub use validation::{validate_tags, TagsError, ValidatedTags, ValidationError};
