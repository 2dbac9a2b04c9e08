//! Root container adapter over a live DOM element.

use site_host::{Node, RootContainer};

use crate::bridge::{self, RootHandle};

#[derive(Debug, Clone)]
/// Root container backed by the page element with a well-known id.
pub struct WebRoot {
    element: RootHandle,
}

impl WebRoot {
    /// Looks up the element with `id`; `None` when the page has no such element (or off the
    /// browser).
    pub fn attach(id: &str) -> Option<Self> {
        bridge::find_root(id).map(|element| Self { element })
    }
}

impl RootContainer for WebRoot {
    fn clear(&self) {
        bridge::clear_root(&self.element);
    }

    fn append(&self, node: &Node) -> Result<(), String> {
        bridge::append_node(&self.element, node)
    }

    fn child_count(&self) -> usize {
        bridge::root_child_count(&self.element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn attach_is_none_off_the_browser() {
        assert!(WebRoot::attach("root").is_none());
    }
}
