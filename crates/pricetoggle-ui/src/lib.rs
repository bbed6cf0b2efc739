#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! DOM wiring for the price visibility toggler.
//!
//! Resolves the host page's toggle controls and price displays once, then
//! flips the hidden marker class on every display whenever any control emits
//! an `input` event. The toggle semantics themselves live in
//! `pricetoggle-core`; this crate only adapts them to `web_sys`.

pub mod error;

#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(target_arch = "wasm32")]
pub use dom::{ToggleBinding, bind, run_app};
