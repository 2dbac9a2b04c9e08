//! Fetch API-backed content source.

use site_host::{ContentError, ContentResponse, ContentSource, ContentSourceFuture};

#[derive(Debug, Clone, Copy, Default)]
/// Browser content source backed by `window.fetch`.
pub struct WebContentSource;

impl ContentSource for WebContentSource {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> ContentSourceFuture<'a, Result<ContentResponse, ContentError>> {
        Box::pin(async move { crate::bridge::fetch_text(url).await })
    }
}
