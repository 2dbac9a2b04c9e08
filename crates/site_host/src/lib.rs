//! Typed host-domain contracts shared by the content renderer and its browser adapters.
//!
//! This crate is the API-first boundary between rendering logic and the page it runs in. It
//! exposes the content-source contract, the DOM node model with its root-container contract,
//! and the navigation observer hub. Concrete browser adapters live in `site_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod dom;
pub mod error;
pub mod navigation;
pub mod source;

pub use dom::{make_node, MemoryRoot, Node, RootContainer};
pub use error::ContentError;
pub use navigation::{NavigationHub, NavigationObserver, NavigationTrigger};
pub use source::{ContentResponse, ContentSource, ContentSourceFuture, MemoryContentSource};
