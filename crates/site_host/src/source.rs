//! Content source service contracts and adapters.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

use crate::ContentError;

/// Object-safe boxed future used by [`ContentSource`] async methods.
pub type ContentSourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw response returned by a [`ContentSource`] before any JSON decoding.
pub struct ContentResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl ContentResponse {
    /// Builds a `200 OK` response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Returns whether the status is in the `2xx` range.
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Host service that retrieves a remote text resource with a single `GET`.
pub trait ContentSource {
    /// Issues one request for `url`.
    fn fetch<'a>(&'a self, url: &'a str)
        -> ContentSourceFuture<'a, Result<ContentResponse, ContentError>>;
}

#[derive(Debug, Default)]
struct MemorySourceState {
    scripted: VecDeque<Result<ContentResponse, ContentError>>,
    fallback: Option<Result<ContentResponse, ContentError>>,
    requests: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory source that replays scripted outcomes and counts requests.
///
/// Scripted outcomes are consumed in order; once exhausted, the fallback outcome (if any) is
/// returned for every further request, otherwise [`ContentError::Network`].
pub struct MemoryContentSource {
    inner: Rc<RefCell<MemorySourceState>>,
}

impl MemoryContentSource {
    /// Source that always answers `200 OK` with `body`.
    pub fn serving(body: impl Into<String>) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().fallback = Some(Ok(ContentResponse::ok(body)));
        source
    }

    /// Source that always fails with `error`.
    pub fn failing(error: ContentError) -> Self {
        let source = Self::default();
        source.inner.borrow_mut().fallback = Some(Err(error));
        source
    }

    /// Queues one outcome ahead of the fallback.
    pub fn push_outcome(&self, outcome: Result<ContentResponse, ContentError>) {
        self.inner.borrow_mut().scripted.push_back(outcome);
    }

    /// Number of requests issued so far.
    pub fn request_count(&self) -> usize {
        self.inner.borrow().requests.len()
    }

    /// URLs requested so far, in order.
    pub fn requested_urls(&self) -> Vec<String> {
        self.inner.borrow().requests.clone()
    }
}

impl ContentSource for MemoryContentSource {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> ContentSourceFuture<'a, Result<ContentResponse, ContentError>> {
        Box::pin(async move {
            let mut inner = self.inner.borrow_mut();
            inner.requests.push(url.to_string());
            if let Some(outcome) = inner.scripted.pop_front() {
                return outcome;
            }
            inner
                .fallback
                .clone()
                .unwrap_or_else(|| Err(ContentError::Network("no scripted response".to_string())))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_source_replays_script_then_fallback() {
        let source = MemoryContentSource::serving("{}");
        source.push_outcome(Err(ContentError::Status(503)));
        let source_obj: &dyn ContentSource = &source;

        assert_eq!(
            block_on(source_obj.fetch("/content.json")),
            Err(ContentError::Status(503))
        );
        assert_eq!(
            block_on(source_obj.fetch("/content.json")),
            Ok(ContentResponse::ok("{}"))
        );
        assert_eq!(source.request_count(), 2);
        assert_eq!(
            source.requested_urls(),
            vec!["/content.json".to_string(), "/content.json".to_string()]
        );
    }

    #[test]
    fn success_range_is_2xx_only() {
        let mut response = ContentResponse::ok("");
        assert!(response.is_success());
        response.status = 204;
        assert!(response.is_success());
        response.status = 304;
        assert!(!response.is_success());
        response.status = 404;
        assert!(!response.is_success());
    }
}
