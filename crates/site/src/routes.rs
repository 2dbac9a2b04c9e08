//! Route table and path normalization.

use std::collections::BTreeMap;

use site_host::{Node, RootContainer};

use crate::{
    content::ContentDocument,
    render::{render_about, render_schedule_results, Labels},
};

/// Strips every trailing `/`; an emptied path becomes `"/"`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
/// Pages this renderer owns.
pub enum Route {
    /// `/about`
    About,
    /// `/schedule-results`
    ScheduleResults,
}

impl Route {
    /// Every route, in table order.
    pub const ALL: [Self; 2] = [Self::About, Self::ScheduleResults];

    /// Normalized path bound to the route.
    pub const fn path(self) -> &'static str {
        match self {
            Self::About => "/about",
            Self::ScheduleResults => "/schedule-results",
        }
    }

    /// Builds the route's node tree without touching any container.
    pub fn build(self, content: &ContentDocument, labels: &Labels) -> Option<Node> {
        match self {
            Self::About => render_about(content, labels),
            Self::ScheduleResults => render_schedule_results(content, labels),
        }
    }

    /// Replaces `root`'s contents with the rendered section.
    ///
    /// The tree is built before `root` is cleared. Returns `Ok(false)`, leaving `root`
    /// untouched, when the section is missing.
    ///
    /// # Errors
    ///
    /// Returns the host's message when `root` rejects the section; `root` is left empty.
    pub fn render(
        self,
        content: &ContentDocument,
        labels: &Labels,
        root: &dyn RootContainer,
    ) -> Result<bool, String> {
        let Some(node) = self.build(content, labels) else {
            return Ok(false);
        };
        root.clear();
        root.append(&node)?;
        Ok(true)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Static mapping from normalized path to [`Route`].
pub struct RouteTable {
    routes: BTreeMap<&'static str, Route>,
}

impl RouteTable {
    /// Table with every [`Route`] bound to its path.
    pub fn standard() -> Self {
        Self {
            routes: Route::ALL.into_iter().map(|route| (route.path(), route)).collect(),
        }
    }

    /// Route bound to an already-normalized `path`.
    pub fn lookup(&self, path: &str) -> Option<Route> {
        self.routes.get(path).copied()
    }

    /// Route for a raw location path.
    pub fn resolve(&self, raw_path: &str) -> Option<Route> {
        self.lookup(&normalize_path(raw_path))
    }

    /// Registered paths in sorted order.
    pub fn paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
