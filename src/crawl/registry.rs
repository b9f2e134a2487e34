// src/crawl/registry.rs
// =============================================================================
// The visited registry: the crawler's single source of truth for "have we
// already seen this URL?".
//
// It tracks two sets:
// - claimed: every URL we have scheduled a fetch for, or recorded. A URL is
//   claimed BEFORE its fetch is queued, so two pages linking to the same URL
//   at the same time can never produce two fetches.
// - visited: every URL that has a recorded entry in the crawl result.
//
// Both sets only ever grow during a crawl. The registry is owned by the crawl
// loop, which handles one completed fetch at a time, so plain HashSets are
// enough. No locking.
// =============================================================================

use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct VisitedRegistry {
    claimed: HashSet<String>,
    visited: HashSet<String>,
}

impl VisitedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Returns true the first time it is called for `url`, false afterwards
    pub fn try_claim(&mut self, url: &str) -> bool {
        if self.claimed.contains(url) {
            return false;
        }
        self.claimed.insert(url.to_string())
    }

    // Records `url` as visited. Returns false if it already was.
    //
    // A visited URL is always claimed too, so it is never scheduled again.
    pub fn mark_visited(&mut self, url: &str) -> bool {
        if self.visited.contains(url) {
            return false;
        }
        self.try_claim(url);
        self.visited.insert(url.to_string())
    }

    pub fn is_claimed(&self, url: &str) -> bool {
        self.claimed.contains(url)
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    pub fn into_visited(self) -> HashSet<String> {
        self.visited
    }
}
