//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → environment overrides (DD_API_KEY, DD_APP_KEY, DD_SITE)
//!     → validation.rs (semantic checks, tags included)
//!     → LoggerConfig (validated, immutable)
//!     → into_parts() → Tags + LoggerOptions for the logger factory
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Credentials may come from the environment instead of the file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{apply_overrides, load_config, parse_config, read_config, ConfigError};
pub use schema::{ConsoleConfig, LoggerConfig, RemoteConfig};
pub use validation::{validate_config, ConfigValidationError};
