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
//! DOM-free model of the price visibility toggler.
//!
//! Everything behaviorally interesting lives behind [`marker::MarkerTarget`],
//! so the toggle semantics are testable without a browser. The wasm crate
//! supplies the `web_sys` implementation of the seam.

pub mod error;
pub mod marker;
pub mod selectors;
pub mod visibility;
