// src/fetch/http.rs
// =============================================================================
// The default page fetcher: HTTP GET + HTML parsing.
//
// How it works:
// 1. GET the URL with the user agent the scheduler picked, following up to
//    10 redirects
// 2. Remember where we ended up (response.url()), that is the canonical URL
// 3. If the response is HTML, extract every <a href> relative to that URL
//
// A non-2xx status is not a failure here: an error page is still a page, and
// its links are reported like any other. Only transport-level problems
// (DNS, TLS, connection reset, redirect loops, ...) become FetchErrors.
//
// Rust concepts:
// - async-trait: async methods in traits
// - Client reuse: one reqwest::Client keeps a connection pool for all fetches
// =============================================================================

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use reqwest::{redirect, Client, ClientBuilder};
use url::Url;

use super::html::{extract_links, normalize_url};
use super::{Fetch, Page};
use crate::error::FetchError;

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the shared HTTP client
    //
    // This is the one step of a crawl that can fail before any page is
    // fetched (e.g. the TLS backend cannot be initialized), so the caller
    // treats an error here as fatal.
    pub fn new() -> Result<Self, FetchError> {
        Self::from_builder(Client::builder())
    }

    // Same as new(), on top of a caller-configured client builder (proxies,
    // extra root certificates, ...). The redirect policy is always ours.
    pub fn from_builder(builder: ClientBuilder) -> Result<Self, FetchError> {
        let client = builder
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(HttpFetcher { client })
    }
}

// Anything we cannot parse for links (PDFs, images, ...) is treated as a page
// with no links. A missing Content-Type gets the benefit of the doubt.
fn is_html(content_type: Option<&str>) -> bool {
    match content_type {
        Some(value) => value.to_ascii_lowercase().contains("html"),
        None => true,
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str, user_agent: &str) -> Result<Page, FetchError> {
        let target = Url::parse(url)?;

        let response = self
            .client
            .get(target)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        let final_url = response.url().clone();
        if final_url.as_str() != url {
            debug!("{} resolved to {}", url, final_url);
        }

        let status = response.status();
        if !status.is_success() {
            warn!("HTTP {} at {}", status, final_url);
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        if !is_html(content_type.as_deref()) {
            debug!(
                "skipping link extraction for {} ({})",
                final_url,
                content_type.as_deref().unwrap_or("unknown content type")
            );
            return Ok(Page {
                final_url: normalize_url(&final_url),
                links: Vec::new(),
            });
        }

        let body = response.text().await?;
        let links = extract_links(&body, &final_url);

        Ok(Page {
            final_url: normalize_url(&final_url),
            links,
        })
    }
}
