// src/fetch/mod.rs
// =============================================================================
// The page fetching capability.
//
// The crawler does not care how a page is loaded. It only needs something
// that, given a URL, eventually answers with:
// - the URL that was actually loaded (after redirects), and
// - every link found on that page, absolute and normalized
// or fails with a FetchError.
//
// That "something" is the Fetch trait. The default implementation,
// HttpFetcher, does a plain HTTP GET and parses the HTML. Tests plug in an
// in-memory site instead.
//
// The politeness delay, the timeout and the choice of user agent are NOT the
// fetcher's job: the crawl scheduler applies them around every call, so
// every implementation gets them for free.
//
// Submodules:
// - html: link extraction + URL normalization
// - http: the reqwest based fetcher
// =============================================================================

mod html;
mod http;

use async_trait::async_trait;

use crate::error::FetchError;

pub use html::{extract_links, normalize_url};
pub use http::HttpFetcher;

// What a successful fetch produces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Normalized URL the page was actually served from
    pub final_url: String,
    /// Normalized outbound links, in document order
    pub links: Vec<String>,
}

// Anything that can load a page and list its links
//
// Implementations must be shareable between the concurrent fetches of one
// crawl, hence the `&self` receiver and the Send + Sync bound. `user_agent`
// is the identity to present for this one request.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<Page, FetchError>;
}
