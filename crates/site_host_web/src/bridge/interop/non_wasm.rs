use super::*;

/// Root handles cannot exist off the browser.
#[derive(Debug, Clone)]
pub enum RootHandle {}

fn unsupported() -> String {
    "Browser navigation APIs are only available when compiled for wasm32".to_string()
}

pub async fn fetch_text(_url: &str) -> Result<ContentResponse, ContentError> {
    Err(ContentError::Unsupported)
}

pub fn find_root(_id: &str) -> Option<RootHandle> {
    None
}

pub fn clear_root(root: &RootHandle) {
    match *root {}
}

pub fn append_node(root: &RootHandle, _node: &Node) -> Result<(), String> {
    match *root {}
}

pub fn root_child_count(root: &RootHandle) -> usize {
    match *root {}
}

pub fn element_text(_id: &str) -> Option<String> {
    None
}

pub fn current_path() -> Option<String> {
    None
}

pub fn install_navigation_hooks(_hub: &NavigationHub) -> Result<(), String> {
    Err(unsupported())
}
