//! Wiring contract between the toggler and the host page's markup.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Selector matching elements that emit the input-change notification.
pub const TOGGLE_CONTROL_SELECTOR: &str = "[data-js='toggle-input']";

/// Selector matching elements whose visibility is toggled.
pub const PRICE_DISPLAY_SELECTOR: &str = "[data-js='card-price']";

/// Class whose presence hides a price display. Toggled verbatim; the
/// stylesheet mapping it to `display: none` is the host page's concern.
pub const HIDDEN_MARKER_CLASS: &str = "card__price--hidden";

/// Host-page wiring contract.
///
/// `Default` yields the documented `data-js` selectors and marker class.
/// Overrides exist for embedding pages that cannot adopt that convention;
/// with the defaults the observable behavior is unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    /// Selector for toggle controls.
    pub controls: String,
    /// Selector for price displays.
    pub displays: String,
    /// Marker class flipped on every display per qualifying event.
    pub marker: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            controls: TOGGLE_CONTROL_SELECTOR.to_string(),
            displays: PRICE_DISPLAY_SELECTOR.to_string(),
            marker: HIDDEN_MARKER_CLASS.to_string(),
        }
    }
}

impl Selectors {
    /// Rejects empty selector or class strings before any DOM query runs.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyField`] naming the first empty field.
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("controls", &self.controls),
            ("displays", &self.displays),
            ("marker", &self.marker),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyField { field });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Selectors;
    use crate::error::ConfigError;

    #[test]
    fn defaults_match_the_markup_contract() {
        let selectors = Selectors::default();
        assert_eq!(selectors.controls, "[data-js='toggle-input']");
        assert_eq!(selectors.displays, "[data-js='card-price']");
        assert_eq!(selectors.marker, "card__price--hidden");
        assert!(selectors.validate().is_ok());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let mut selectors = Selectors::default();
        selectors.marker = "  ".to_string();
        assert_eq!(
            selectors.validate(),
            Err(ConfigError::EmptyField { field: "marker" })
        );
    }

    #[test]
    fn partial_overrides_deserialize_over_defaults() {
        let selectors: Selectors =
            serde_json::from_str(r#"{"controls": "[data-toggle]"}"#).unwrap();
        assert_eq!(selectors.controls, "[data-toggle]");
        assert_eq!(selectors.displays, "[data-js='card-price']");
        assert_eq!(selectors.marker, "card__price--hidden");
    }
}
