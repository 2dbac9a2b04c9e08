//! Browser (`wasm32`) implementations of [`site_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for content fetching, the root
//! container element, and navigation observation.
//!
//! Bridge bindings live under `bridge/`, with `bridge::interop` holding the shared
//! wasm/non-wasm transport glue. On non-wasm targets every adapter is inert.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod navigation;
pub mod root;
pub mod source;

pub use navigation::{current_path, inline_text, install_navigation_bridge};
pub use root::WebRoot;
pub use source::WebContentSource;
