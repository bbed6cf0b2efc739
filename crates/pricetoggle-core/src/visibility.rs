//! Visible/hidden state machine for a single price display.

/// Visibility of one price display, derived from marker-class membership in
/// the element's class set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    /// Marker class absent; the element renders normally.
    Visible,
    /// Marker class present; the stylesheet hides the element.
    Hidden,
}

impl Visibility {
    /// State implied by marker membership at load time or after an event.
    #[must_use]
    pub const fn from_marker(present: bool) -> Self {
        if present { Self::Hidden } else { Self::Visible }
    }

    /// Whether the marker class must be present for this state.
    #[must_use]
    pub const fn marker_present(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// The opposite state. Every qualifying event applies this exactly once
    /// per display; there is no terminal state.
    #[must_use]
    pub const fn inverted(self) -> Self {
        match self {
            Self::Visible => Self::Hidden,
            Self::Hidden => Self::Visible,
        }
    }
}
