// src/crawl/result.rs
// =============================================================================
// What a finished crawl hands to the output writers.
//
// - links: page URL -> the outbound links found on it (empty if the fetch
//   failed). Every fetched page has an entry, successful or not.
// - visited: the set of every recorded page URL. Always the same set as the
//   keys of `links`.
// - root: the key the start page was recorded under. Usually the start URL
//   itself, but it differs when the start URL redirects somewhere else.
//
// Once the crawl is over this is read-only data.
// =============================================================================

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlResult {
    root: String,
    visited: HashSet<String>,
    links: HashMap<String, Vec<String>>,
}

impl CrawlResult {
    pub fn new(
        root: String,
        visited: HashSet<String>,
        links: HashMap<String, Vec<String>>,
    ) -> Self {
        CrawlResult {
            root,
            visited,
            links,
        }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    pub fn links(&self) -> &HashMap<String, Vec<String>> {
        &self.links
    }

    // Outbound links of one page, None if the page was never fetched
    pub fn links_of(&self, url: &str) -> Option<&[String]> {
        self.links.get(url).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    // Visited URLs in lexicographic order, for reproducible output files
    pub fn sorted_visited(&self) -> Vec<&str> {
        let mut urls: Vec<&str> = self.visited.iter().map(String::as_str).collect();
        urls.sort_unstable();
        urls
    }
}
