//! One-time resolution of the host page's elements and listener wiring.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::events::EventListener;
use pricetoggle_core::marker::{MarkerTarget, toggle_all};
use pricetoggle_core::selectors::Selectors;
use wasm_bindgen::JsCast;
use web_sys::{Document, DomTokenList, Element};

use crate::error::{BindError, BindResult};

/// A price display resolved from the live document. Holds the element's
/// class list so toggling never re-queries the document.
struct PriceDisplay {
    class_list: DomTokenList,
    marker: Rc<str>,
}

impl MarkerTarget for PriceDisplay {
    fn has_marker(&self) -> bool {
        self.class_list.contains(&self.marker)
    }

    fn set_marker(&mut self, present: bool) {
        let result = if present {
            self.class_list.add_1(&self.marker)
        } else {
            self.class_list.remove_1(&self.marker)
        };
        if let Err(err) = result {
            console::error!("marker class update failed", err);
        }
    }
}

/// Handle owning the registered listeners.
///
/// Dropping the handle detaches every listener; call
/// [`ToggleBinding::forget`] for page-lifetime wiring with no teardown.
pub struct ToggleBinding {
    listeners: Vec<EventListener>,
    display_count: usize,
}

impl ToggleBinding {
    /// Number of toggle controls that were wired up.
    #[must_use]
    pub fn control_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of price displays captured at bind time.
    #[must_use]
    pub const fn display_count(&self) -> usize {
        self.display_count
    }

    /// Leaks the listeners so the wiring lives for the rest of the page.
    pub fn forget(self) {
        for listener in self.listeners {
            listener.forget();
        }
    }
}

/// Resolves both element collections exactly once and registers an `input`
/// listener on every control.
///
/// The collections are never re-queried, so elements inserted after this call
/// are neither wired up nor affected. Zero matches on either side is not an
/// error; the binding is simply inert.
///
/// # Errors
///
/// Fails if the configuration is invalid or a selector is rejected by the
/// DOM engine. The default [`Selectors`] never trigger either case.
pub fn bind(document: &Document, selectors: &Selectors) -> BindResult<ToggleBinding> {
    selectors
        .validate()
        .map_err(|source| BindError::Config { source })?;

    let controls = query(document, &selectors.controls)?;
    let marker: Rc<str> = Rc::from(selectors.marker.as_str());
    let displays: Vec<PriceDisplay> = query(document, &selectors.displays)?
        .into_iter()
        .map(|element| PriceDisplay {
            class_list: element.class_list(),
            marker: Rc::clone(&marker),
        })
        .collect();

    if controls.is_empty() || displays.is_empty() {
        console::debug!(format!(
            "price toggle wiring is inert: {} controls, {} displays",
            controls.len(),
            displays.len()
        ));
    }

    let display_count = displays.len();
    let displays = Rc::new(RefCell::new(displays));
    let listeners = controls
        .iter()
        .map(|control| {
            let displays = Rc::clone(&displays);
            EventListener::new(control, "input", move |_event| {
                toggle_all(displays.borrow_mut().as_mut_slice());
            })
        })
        .collect();

    Ok(ToggleBinding {
        listeners,
        display_count,
    })
}

fn query(document: &Document, selector: &str) -> BindResult<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(|_err| BindError::InvalidSelector {
            selector: selector.to_string(),
        })?;
    let mut elements = Vec::new();
    for index in 0..nodes.length() {
        if let Some(element) = nodes
            .get(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Entrypoint invoked by Trunk for wasm32 builds. Binds the default wiring
/// against the global document and leaks the handle.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Err(err) = wire_default() {
        console::error!("price toggle wiring failed", err.to_string());
    }
}

fn wire_default() -> BindResult<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BindError::DocumentUnavailable)?;
    bind(&document, &Selectors::default())?.forget();
    Ok(())
}
