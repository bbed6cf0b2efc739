//! Error types for DOM wiring.

use pricetoggle_core::error::ConfigError;
use thiserror::Error;

/// Primary error type for binding the toggler to a document.
#[derive(Debug, Error)]
pub enum BindError {
    /// No global `Document` was available on the page.
    #[error("document unavailable")]
    DocumentUnavailable,
    /// A configured selector was rejected by the DOM engine. Only reachable
    /// with overridden selectors; the defaults always parse.
    #[error("invalid selector {selector:?}")]
    InvalidSelector {
        /// Selector that failed to parse.
        selector: String,
    },
    /// The wiring configuration failed validation.
    #[error("invalid wiring configuration")]
    Config {
        /// Underlying validation failure.
        #[source]
        source: ConfigError,
    },
}

/// Convenience alias for binding results.
pub type BindResult<T> = Result<T, BindError>;

#[cfg(test)]
mod tests {
    use super::BindError;
    use pricetoggle_core::error::ConfigError;
    use std::error::Error;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            BindError::DocumentUnavailable.to_string(),
            "document unavailable"
        );
        assert_eq!(
            BindError::InvalidSelector {
                selector: "[data-js=".to_string()
            }
            .to_string(),
            "invalid selector \"[data-js=\""
        );
    }

    #[test]
    fn config_failures_keep_their_source() {
        let err = BindError::Config {
            source: ConfigError::EmptyField { field: "controls" },
        };
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("selector field \"controls\" must not be empty")
        );
    }
}
