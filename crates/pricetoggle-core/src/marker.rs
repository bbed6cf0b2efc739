//! Marker-class mutation expressed over a DOM-free seam.

use crate::visibility::Visibility;

/// One element whose hidden marker can be queried and rewritten.
///
/// The wasm crate implements this for elements resolved from the host page;
/// tests implement it with an in-memory class set.
pub trait MarkerTarget {
    /// Whether the marker class is currently present.
    fn has_marker(&self) -> bool;

    /// Adds or removes the marker class so that membership matches `present`.
    fn set_marker(&mut self, present: bool);

    /// Current visibility implied by marker membership.
    fn visibility(&self) -> Visibility {
        Visibility::from_marker(self.has_marker())
    }
}

/// Inverts marker membership on every target, exactly once per target, in
/// iteration order.
///
/// Every registered control drives this same operation over the same shared
/// collection, so one qualifying event fires one flip per display regardless
/// of how many controls exist. An empty collection is a no-op, not an error.
pub fn toggle_all<T: MarkerTarget>(targets: &mut [T]) {
    for target in targets {
        let next = target.visibility().inverted();
        target.set_marker(next.marker_present());
    }
}
