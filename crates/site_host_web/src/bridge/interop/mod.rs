//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for the bridge.

use site_host::{ContentError, ContentResponse, NavigationHub, Node};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::RootHandle;

pub async fn fetch_text(url: &str) -> Result<ContentResponse, ContentError> {
    imp::fetch_text(url).await
}

pub fn find_root(id: &str) -> Option<RootHandle> {
    imp::find_root(id)
}

pub fn clear_root(root: &RootHandle) {
    imp::clear_root(root)
}

pub fn append_node(root: &RootHandle, node: &Node) -> Result<(), String> {
    imp::append_node(root, node)
}

pub fn root_child_count(root: &RootHandle) -> usize {
    imp::root_child_count(root)
}

pub fn element_text(id: &str) -> Option<String> {
    imp::element_text(id)
}

pub fn current_path() -> Option<String> {
    imp::current_path()
}

pub fn install_navigation_hooks(hub: &NavigationHub) -> Result<(), String> {
    imp::install_navigation_hooks(hub)
}
