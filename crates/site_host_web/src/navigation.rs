//! Navigation bridge: feeds browser history mutations and navigation events into a
//! [`NavigationHub`].

use site_host::NavigationHub;

use crate::bridge;

/// Installs pass-through wrappers on `history.pushState`/`history.replaceState` and listeners
/// for `popstate` and `DOMContentLoaded`, all emitting into `hub`.
///
/// Wrapped methods keep their original behavior and return value; observers run only after the
/// original call returns successfully.
///
/// # Errors
///
/// Returns an error when the history object cannot be patched or listeners cannot be attached,
/// and always on non-wasm targets.
pub fn install_navigation_bridge(hub: &NavigationHub) -> Result<(), String> {
    bridge::install_navigation_hooks(hub)
}

/// Current `location.pathname`, or `None` off the browser.
pub fn current_path() -> Option<String> {
    bridge::current_path()
}

/// Text content of the element with `id` (for example an inline
/// `<script type="application/json">` block), or `None` when absent or off the browser.
pub fn inline_text(id: &str) -> Option<String> {
    bridge::element_text(id)
}
