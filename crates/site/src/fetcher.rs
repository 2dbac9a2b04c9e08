//! Single-slot content cache with in-flight request coalescing.

use std::{cell::RefCell, rc::Rc};

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use leptos::logging;
use serde::{Deserialize, Serialize};
use site_host::{ContentError, ContentSource};

use crate::content::ContentDocument;

type PendingLoad = Shared<LocalBoxFuture<'static, Option<Rc<ContentDocument>>>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// What a failed load leaves behind in the cache slot.
pub enum FailurePolicy {
    /// The failure is cached for the page lifetime; later loads resolve to `None` without a
    /// request.
    #[default]
    Terminal,
    /// The slot is reset so the next load issues a fresh request.
    RetryOnNextLoad,
}

enum CacheState {
    Empty,
    Loading(PendingLoad),
    Populated(Rc<ContentDocument>),
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Snapshot of the cache slot for diagnostics.
pub enum CacheStatus {
    /// Nothing requested yet.
    Empty,
    /// A request is in flight.
    Loading,
    /// The document is cached.
    Populated,
    /// A request failed under [`FailurePolicy::Terminal`].
    Failed,
}

/// Memoizing loader for the content document.
///
/// At most one request is outstanding at any time: concurrent [`ContentFetcher::load`] calls
/// await the same shared operation and observe the same `Rc`.
pub struct ContentFetcher {
    source: Rc<dyn ContentSource>,
    url: String,
    policy: FailurePolicy,
    state: RefCell<CacheState>,
}

impl ContentFetcher {
    /// Creates an empty cache slot for `url` served by `source`.
    pub fn new(source: Rc<dyn ContentSource>, url: impl Into<String>, policy: FailurePolicy) -> Self {
        Self {
            source,
            url: url.into(),
            policy,
            state: RefCell::new(CacheState::Empty),
        }
    }

    /// Current state of the cache slot.
    pub fn status(&self) -> CacheStatus {
        match &*self.state.borrow() {
            CacheState::Empty => CacheStatus::Empty,
            CacheState::Loading(_) => CacheStatus::Loading,
            CacheState::Populated(_) => CacheStatus::Populated,
            CacheState::Failed => CacheStatus::Failed,
        }
    }

    /// Returns the content document, fetching it on first use.
    ///
    /// Resolves to `None` when the fetch failed; the failure has already been logged.
    pub async fn load(&self) -> Option<Rc<ContentDocument>> {
        let pending = {
            let mut state = self.state.borrow_mut();
            let pending = match std::mem::replace(&mut *state, CacheState::Empty) {
                CacheState::Populated(document) => {
                    *state = CacheState::Populated(Rc::clone(&document));
                    return Some(document);
                }
                CacheState::Failed => {
                    *state = CacheState::Failed;
                    return None;
                }
                CacheState::Loading(pending) => pending,
                CacheState::Empty => self.start(),
            };
            *state = CacheState::Loading(pending.clone());
            pending
        };

        let loaded = pending.clone().await;
        self.settle(&pending, &loaded);
        loaded
    }

    fn start(&self) -> PendingLoad {
        let source = Rc::clone(&self.source);
        let url = self.url.clone();
        async move {
            match fetch_document(source.as_ref(), &url).await {
                Ok(document) => Some(Rc::new(document)),
                Err(err) => {
                    logging::error!("content load error for `{url}`: {err}");
                    None
                }
            }
        }
        .boxed_local()
        .shared()
    }

    // Every awaiter settles, but only while the slot still holds the load it awaited; a stale
    // awaiter must not clobber a newer in-flight load.
    fn settle(&self, awaited: &PendingLoad, loaded: &Option<Rc<ContentDocument>>) {
        let mut state = self.state.borrow_mut();
        match &*state {
            CacheState::Loading(current) if current.ptr_eq(awaited) => {}
            _ => return,
        }
        *state = match (loaded, self.policy) {
            (Some(document), _) => CacheState::Populated(Rc::clone(document)),
            (None, FailurePolicy::Terminal) => CacheState::Failed,
            (None, FailurePolicy::RetryOnNextLoad) => CacheState::Empty,
        };
    }
}

impl std::fmt::Debug for ContentFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFetcher")
            .field("url", &self.url)
            .field("policy", &self.policy)
            .field("status", &self.status())
            .finish()
    }
}

/// Issues one request through `source` and decodes the body.
///
/// # Errors
///
/// Returns the source's error, [`ContentError::Status`] for a non-`2xx` response, or
/// [`ContentError::Malformed`] when the body is not a JSON object.
pub async fn fetch_document(
    source: &dyn ContentSource,
    url: &str,
) -> Result<ContentDocument, ContentError> {
    let response = source.fetch(url).await?;
    if !response.is_success() {
        return Err(ContentError::Status(response.status));
    }
    ContentDocument::from_json_str(&response.body)
}
