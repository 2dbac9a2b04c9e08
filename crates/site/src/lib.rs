//! Route-aware content renderer for the static site.
//!
//! One JSON content document is fetched (once) and rendered into the page's root container
//! whenever the current path matches a known route. Rendering re-runs on every navigation.

mod config;
mod content;
mod dispatch;
mod fetcher;
mod render;
mod routes;
mod web_app;

pub use config::{
    ConfigError, Locale, SiteConfig, CONFIG_ELEMENT_ID, DEFAULT_CONTENT_URL, DEFAULT_ROOT_ID,
};
pub use content::{
    AboutSection, ContentDocument, HistoryEntry, MatchRecord, Principle, ScheduleSection, Season,
    Text, ABOUT_SECTION_KEY, SCHEDULE_SECTION_KEY,
};
pub use dispatch::{DispatchOutcome, Dispatcher};
pub use fetcher::{fetch_document, CacheStatus, ContentFetcher, FailurePolicy};
pub use render::{render_about, render_schedule_results, Labels};
pub use routes::{normalize_path, Route, RouteTable};
pub use web_app::mount_with;

/// Browser entry point: installs the panic hook and mounts with the page's configuration.
///
/// Overrides are read from the inline JSON block with id [`CONFIG_ELEMENT_ID`]; without one the
/// defaults apply.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let inline = site_host_web::inline_text(CONFIG_ELEMENT_ID);
    mount_with(SiteConfig::resolve(inline.as_deref()));
}
