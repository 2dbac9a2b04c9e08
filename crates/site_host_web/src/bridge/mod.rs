//! Browser capability bridge for `site_host_web` adapters.
//!
//! Adapters call these functions instead of touching `web_sys` directly so the non-wasm shim
//! stays in one place.

mod interop;

use site_host::{ContentError, ContentResponse, NavigationHub, Node};

pub use interop::RootHandle;

pub async fn fetch_text(url: &str) -> Result<ContentResponse, ContentError> {
    interop::fetch_text(url).await
}

pub fn find_root(id: &str) -> Option<RootHandle> {
    interop::find_root(id)
}

pub fn clear_root(root: &RootHandle) {
    interop::clear_root(root)
}

pub fn append_node(root: &RootHandle, node: &Node) -> Result<(), String> {
    interop::append_node(root, node)
}

pub fn root_child_count(root: &RootHandle) -> usize {
    interop::root_child_count(root)
}

pub fn element_text(id: &str) -> Option<String> {
    interop::element_text(id)
}

pub fn current_path() -> Option<String> {
    interop::current_path()
}

pub fn install_navigation_hooks(hub: &NavigationHub) -> Result<(), String> {
    interop::install_navigation_hooks(hub)
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use site_host::NavigationHub;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn fetch_public_api_non_wasm_parity() {
        assert_eq!(
            block_on(fetch_text("/content/site-content.json")),
            Err(ContentError::Unsupported)
        );
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn dom_public_api_non_wasm_parity() {
        assert!(find_root("root").is_none());
        assert_eq!(element_text("site-config"), None);
        assert_eq!(current_path(), None);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn navigation_public_api_non_wasm_parity() {
        let hub = NavigationHub::default();
        assert_eq!(
            install_navigation_hooks(&hub).expect_err("hooks should fail"),
            "Browser navigation APIs are only available when compiled for wasm32".to_string()
        );
        assert_eq!(hub.observer_count(), 0);
    }
}
