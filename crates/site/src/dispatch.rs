//! One dispatch cycle: normalize, look up, load, render.

use std::rc::Rc;

use leptos::logging;
use site_host::{ContentSource, RootContainer};

use crate::{
    config::SiteConfig,
    fetcher::ContentFetcher,
    render::Labels,
    routes::{normalize_path, Route, RouteTable},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a dispatch did.
pub enum DispatchOutcome {
    /// The path is not in the route table; nothing was fetched or touched.
    UnknownRoute,
    /// Content could not be loaded; the root was left as it was.
    ContentUnavailable(Route),
    /// The document has no section for the route; the root was left as it was.
    SectionMissing(Route),
    /// The root rejected the rendered section and was left empty.
    RenderFailed(Route),
    /// The root now holds the route's section.
    Rendered(Route),
}

/// Owns the route table, the content cache slot and the root container.
#[derive(Debug)]
pub struct Dispatcher<R> {
    routes: RouteTable,
    fetcher: ContentFetcher,
    root: R,
    labels: Labels,
}

impl<R: RootContainer> Dispatcher<R> {
    /// Assembles a dispatcher from its parts.
    pub fn new(routes: RouteTable, fetcher: ContentFetcher, root: R, labels: Labels) -> Self {
        Self {
            routes,
            fetcher,
            root,
            labels,
        }
    }

    /// Standard route table and a fresh cache slot configured from `config`.
    pub fn from_config(config: &SiteConfig, source: Rc<dyn ContentSource>, root: R) -> Self {
        Self::new(
            RouteTable::standard(),
            ContentFetcher::new(source, config.content_url.clone(), config.failure_policy),
            root,
            config.labels(),
        )
    }

    /// The content cache slot.
    pub fn fetcher(&self) -> &ContentFetcher {
        &self.fetcher
    }

    /// The root container.
    pub fn root(&self) -> &R {
        &self.root
    }

    /// Renders the route matching `path`, if any.
    pub async fn dispatch(&self, path: &str) -> DispatchOutcome {
        let Some(route) = self.routes.lookup(&normalize_path(path)) else {
            return DispatchOutcome::UnknownRoute;
        };
        let Some(content) = self.fetcher.load().await else {
            return DispatchOutcome::ContentUnavailable(route);
        };
        match route.render(&content, &self.labels, &self.root) {
            Ok(true) => DispatchOutcome::Rendered(route),
            Ok(false) => DispatchOutcome::SectionMissing(route),
            Err(err) => {
                logging::error!("rendering `{}` failed: {err}", route.path());
                DispatchOutcome::RenderFailed(route)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use site_host::{make_node, ContentError, MemoryContentSource, MemoryRoot, Node};

    use super::*;
    use crate::{config::Locale, fetcher::CacheStatus};

    const CONTENT: &str = r#"{
        "about": { "title": "About us", "lead": "A small club." },
        "scheduleResults": {
            "title": "Schedule",
            "seasons": [{ "year": 2024, "matches": [] }]
        }
    }"#;

    fn server_markup() -> Vec<Node> {
        vec![make_node("p", Some("server-rendered"), None)]
    }

    fn dispatcher(source: &MemoryContentSource, root: &MemoryRoot) -> Dispatcher<MemoryRoot> {
        Dispatcher::from_config(&SiteConfig::default(), Rc::new(source.clone()), root.clone())
    }

    #[test]
    fn unknown_route_touches_nothing_and_fetches_nothing() {
        let source = MemoryContentSource::serving(CONTENT);
        let root = MemoryRoot::with_children(server_markup());
        let dispatcher = dispatcher(&source, &root);

        for path in ["/", "", "/contact", "/about/team", "/About"] {
            assert_eq!(block_on(dispatcher.dispatch(path)), DispatchOutcome::UnknownRoute);
        }
        assert_eq!(root.children(), server_markup());
        assert_eq!(root.mutation_count(), 0);
        assert_eq!(source.request_count(), 0);
        assert_eq!(dispatcher.fetcher().status(), CacheStatus::Empty);
    }

    #[test]
    fn known_route_renders_with_trailing_slash() {
        let source = MemoryContentSource::serving(CONTENT);
        let root = MemoryRoot::with_children(server_markup());
        let dispatcher = dispatcher(&source, &root);

        assert_eq!(
            block_on(dispatcher.dispatch("/about/")),
            DispatchOutcome::Rendered(Route::About)
        );
        let children = root.children();
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].children[0].text_content(), "About us");
    }

    #[test]
    fn navigation_between_routes_reuses_cached_content() {
        let source = MemoryContentSource::serving(CONTENT);
        let root = MemoryRoot::default();
        let dispatcher = dispatcher(&source, &root);

        assert_eq!(
            block_on(dispatcher.dispatch("/about")),
            DispatchOutcome::Rendered(Route::About)
        );
        assert_eq!(
            block_on(dispatcher.dispatch("/schedule-results")),
            DispatchOutcome::Rendered(Route::ScheduleResults)
        );
        assert_eq!(
            block_on(dispatcher.dispatch("/about")),
            DispatchOutcome::Rendered(Route::About)
        );

        assert_eq!(source.request_count(), 1);
        assert_eq!(dispatcher.root().child_count(), 1);
    }

    #[test]
    fn failed_load_leaves_root_untouched() {
        let source = MemoryContentSource::failing(ContentError::Status(502));
        let root = MemoryRoot::with_children(server_markup());
        let dispatcher = dispatcher(&source, &root);

        assert_eq!(
            block_on(dispatcher.dispatch("/schedule-results")),
            DispatchOutcome::ContentUnavailable(Route::ScheduleResults)
        );
        assert_eq!(
            block_on(dispatcher.dispatch("/about")),
            DispatchOutcome::ContentUnavailable(Route::About)
        );
        assert_eq!(root.mutation_count(), 0);
        assert_eq!(root.children(), server_markup());
        assert_eq!(source.request_count(), 1);
    }

    #[test]
    fn empty_document_is_a_missing_section() {
        let source = MemoryContentSource::serving("{}");
        let root = MemoryRoot::default();
        let dispatcher = dispatcher(&source, &root);

        assert_eq!(
            block_on(dispatcher.dispatch("/about")),
            DispatchOutcome::SectionMissing(Route::About)
        );
        assert_eq!(root.child_count(), 0);
        assert_eq!(root.mutation_count(), 0);
    }

    #[test]
    fn rejected_section_is_not_reported_as_rendered() {
        let source = MemoryContentSource::serving(CONTENT);
        let root = MemoryRoot::with_children(server_markup());
        root.reject_appends("append refused");
        let dispatcher = dispatcher(&source, &root);

        assert_eq!(
            block_on(dispatcher.dispatch("/about")),
            DispatchOutcome::RenderFailed(Route::About)
        );
        assert_eq!(root.child_count(), 0);
        assert_eq!(source.request_count(), 1);
    }

    #[test]
    fn configured_locale_and_url_are_used() {
        let source = MemoryContentSource::serving(CONTENT);
        let root = MemoryRoot::default();
        let config = SiteConfig {
            content_url: "/data/content.json".to_string(),
            locale: Locale::Japanese,
            ..SiteConfig::default()
        };
        let dispatcher = Dispatcher::from_config(&config, Rc::new(source.clone()), root.clone());

        block_on(dispatcher.dispatch("/schedule-results"));

        assert_eq!(source.requested_urls(), vec!["/data/content.json".to_string()]);
        let section = &root.children()[0];
        assert_eq!(section.find_all("h2")[0].text_content(), "2024年");
    }
}
