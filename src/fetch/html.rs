// src/fetch/html.rs
// =============================================================================
// This module extracts links from HTML pages and normalizes URLs.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Every URL the crawler stores goes through normalize_url(), so two URLs are
// "the same page" exactly when their normalized strings are equal:
// - the #fragment is dropped
// - trailing slashes are stripped ("https://example.com/docs/" and
//   "https://example.com/docs" are the same key)
// - nothing else is touched (query parameters keep their order)
//
// Rust concepts:
// - Iterators and filter_map: turn DOM nodes into owned Strings
// - Borrowing: we only borrow the HTML text, the DOM is dropped at the end
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Turns a parsed URL into the string key used everywhere in the crawler
pub fn normalize_url(url: &Url) -> String {
    let mut url = url.clone();
    url.set_fragment(None);
    url.as_str().trim_end_matches('/').to_string()
}

// Extracts every hyperlink on the page as an absolute, normalized URL
//
// Parameters:
//   html: the HTML content to parse
//   base: the URL the page was actually served from (after redirects)
//
// Returns: links in document order. Duplicates are kept, the page really
// does link to them more than once.
//
// Example:
//   html = "<a href='/docs/'>Docs</a>"
//   base = "https://example.com/index.html"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let document = Html::parse_document(html);

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(base, href))
        .collect()
}

// Resolves a (possibly relative) href against the page URL
//
// Url::join handles both cases: an absolute href replaces the base entirely,
// a relative one is resolved the way a browser would. Hrefs that cannot be
// resolved at all are skipped.
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    base.join(href.trim()).ok().map(|url| normalize_url(&url))
}
