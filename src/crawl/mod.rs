// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Dynamic frontier: new fetches are queued as soon as a page's links are in
// - Bounded concurrency (a semaphore caps in-flight fetches)
// - Same-host restriction (doesn't crawl external sites or subdomains)
// - Depth cutoff: deep pages are recorded but not expanded
// - Deduplication: every URL is fetched at most once per crawl
//
// Submodules:
// - frontier: the scheduler loop
// - registry: the "already seen?" authority
// - result: the data handed to the output writers
// =============================================================================

mod frontier;
mod registry;
mod result;

pub use frontier::{crawl_website, url_depth};
pub use registry::VisitedRegistry;
pub use result::CrawlResult;
