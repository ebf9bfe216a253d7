//! Error types, gathered in one place.
//!
//! | Error | Raised by | Fatal to |
//! |---|---|---|
//! | `TagsError` | tag validation | logger construction |
//! | `BuildError` | `LoggerBuilder::build` | logger construction |
//! | `DeliveryError` | remote sink with `ErrorPolicy::Propagate` | the `log` call |
//! | `SinkError` | any sink | the `log` call (collected) |
//! | `DispatchError` | `Logger::log` | the `log` call |
//! | `ConfigError` | config loading | startup |

use thiserror::Error;

use crate::record::InvalidTimestampFormat;

pub use crate::config::loader::ConfigError;
pub use crate::logger::dispatcher::DispatchError;
pub use crate::remote::SubmitError;
pub use crate::sink::{DeliveryError, SinkError};
pub use crate::tags::{TagsError, ValidationError};

/// A logger could not be constructed. No partial logger exists.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Validation(#[from] TagsError),

    #[error("invalid site '{site}': {source}")]
    InvalidSite {
        site: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    TimestampFormat(#[from] InvalidTimestampFormat),

    #[error("failed to create intake client: {0}")]
    Client(#[from] reqwest::Error),
}
