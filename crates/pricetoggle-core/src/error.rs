//! Error types for wiring configuration.

use thiserror::Error;

/// Primary error type for selector configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A selector or marker-class string was empty.
    #[error("selector field {field:?} must not be empty")]
    EmptyField {
        /// Offending configuration field.
        field: &'static str,
    },
}

/// Convenience alias for configuration results.
pub type ConfigResult<T> = Result<T, ConfigError>;
