// src/crawl/frontier.rs
// =============================================================================
// The crawl scheduler.
//
// This is not a level-by-level BFS. The amount of work is unknown up front
// and grows unevenly (one page can add fifty new tasks at once), so we keep
// a growing set of in-flight fetches and react to whichever finishes first:
//
// 1. Claim the start URL and push its fetch into the frontier
// 2. Wait for ANY fetch in the frontier to complete
// 3. Record the page (or an empty link list if the fetch failed)
// 4. If the page is shallower than max_depth, claim and push a fetch for
//    every same-host link nobody has claimed yet
// 5. Go back to 2 until the frontier is empty
//
// Concurrency:
// - The frontier is a FuturesUnordered polled by this single loop, so the
//   registry and the result maps have exactly one writer and need no locks.
// - A semaphore caps how many fetches are past the admission gate at once.
//   Tasks beyond the cap simply wait on the semaphore. The permit is a guard:
//   it is released when the task ends, however it ends.
// - Each fetch is wrapped in a timeout. A fetch that overruns is dropped,
//   which also releases its permit.
//
// Termination: every task ends (success, error, timeout or panic), and new
// tasks are only created for never-claimed URLs, of which there are finitely
// many in any finite site.
// =============================================================================

use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use tokio::sync::Semaphore;
use url::Url;

use super::registry::VisitedRegistry;
use super::result::CrawlResult;
use crate::config::CrawlConfig;
use crate::error::FetchError;
use crate::fetch::{Fetch, Page};

// Depth of a URL: how many path segments it has
//
//   https://example.com       -> 0
//   https://example.com/      -> 0
//   https://example.com/a/b   -> 2
//   https://example.com/a//b  -> 3 (empty segments between slashes count)
//
// Trailing slashes are ignored, just like in normalized URLs. Unparsable
// URLs get depth 0.
pub fn url_depth(url: &str) -> usize {
    match Url::parse(url) {
        Ok(url) => {
            let path = url.path().trim_end_matches('/');
            if path.is_empty() {
                0
            } else {
                path.split('/').count() - 1
            }
        }
        Err(_) => 0,
    }
}

// Crawls the site described by `config`, loading pages through `fetcher`
//
// Never fails: pages that cannot be fetched are recorded with no links.
pub async fn crawl_website<F>(fetcher: &F, config: &CrawlConfig) -> CrawlResult
where
    F: Fetch + ?Sized,
{
    let gate = Semaphore::new(config.concurrency());
    let mut registry = VisitedRegistry::new();
    let mut graph: HashMap<String, Vec<String>> = HashMap::new();
    let mut root = config.start_url().to_string();

    let mut frontier = FuturesUnordered::new();
    registry.try_claim(config.start_url());
    frontier.push(fetch_task(fetcher, &gate, config, config.start_url().to_string()));

    while let Some((requested, outcome)) = frontier.next().await {
        let (page_url, page_links) = match outcome {
            Ok(Page { final_url, links }) => {
                info!("{} links found at: {}", links.len(), requested);
                (final_url, links)
            }
            Err(e) => {
                error!("Error while scanning {}: {}", requested, e);
                (requested.clone(), Vec::new())
            }
        };

        // Two different URLs can redirect to the same page. Only the first
        // one to complete gets recorded.
        if !registry.mark_visited(&page_url) {
            debug!("{} (via {}) is already recorded, skipping", page_url, requested);
            continue;
        }

        if requested == config.start_url() {
            root = page_url.clone();
        }

        let depth = url_depth(&page_url);
        if depth < config.max_depth() {
            for link in &page_links {
                if config.is_same_site(link) && registry.try_claim(link) {
                    debug!("queueing {} (found at depth {})", link, depth);
                    frontier.push(fetch_task(fetcher, &gate, config, link.clone()));
                }
            }
        } else {
            debug!("{} is at depth {}, not following its links", page_url, depth);
        }

        graph.insert(page_url, page_links);
    }

    CrawlResult::new(root, registry.into_visited(), graph)
}

// One unit of work: wait for a slot, pick a user agent, wait out the
// politeness delay, fetch.
//
// Returns the URL that was requested together with the outcome, so the
// crawl loop knows which task finished even when the fetch failed.
async fn fetch_task<F>(
    fetcher: &F,
    gate: &Semaphore,
    config: &CrawlConfig,
    url: String,
) -> (String, Result<Page, FetchError>)
where
    F: Fetch + ?Sized,
{
    // Held until this function returns, on every path
    let _permit = match gate.acquire().await {
        Ok(permit) => permit,
        Err(e) => return (url, Err(FetchError::Unexpected(e.to_string()))),
    };

    let user_agent = config.pick_user_agent();
    info!("Scanning URL: {} (User-Agent: {})", url, user_agent);
    tokio::time::sleep(config.delay().sample()).await;

    let fetch = AssertUnwindSafe(fetcher.fetch(&url, user_agent)).catch_unwind();
    let outcome = match tokio::time::timeout(config.timeout(), fetch).await {
        Ok(Ok(result)) => result,
        Ok(Err(panic)) => Err(FetchError::Unexpected(panic_message(panic))),
        Err(_) => Err(FetchError::Timeout(config.timeout())),
    };

    (url, outcome)
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("fetcher panicked: {}", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("fetcher panicked: {}", message)
    } else {
        "fetcher panicked".to_string()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is FuturesUnordered?
//    - A set of futures that yields their outputs in COMPLETION order
//    - frontier.next().await means "wait until any one of them finishes"
//    - You can push new futures into it at any time, even mid-crawl
//
// 2. Why a Semaphore and not just "spawn 10 workers"?
//    - The number of tasks is unknown up front and keeps growing
//    - Every task exists right away, but only `concurrency` of them can hold
//      a permit; the rest sleep in gate.acquire() until one is released
//
// 3. Why is `_permit` named with an underscore?
//    - We never read it, we only need it to stay alive
//    - A plain `_` would drop it IMMEDIATELY, releasing the slot too early
//    - `_permit` keeps it until the end of the function
//
// 4. Why catch_unwind?
//    - A panic inside one fetcher would otherwise tear down the whole crawl
//    - AssertUnwindSafe tells the compiler we accept whatever state the
//      fetcher leaves behind; we only look at its result
// -----------------------------------------------------------------------------
