// src/lib.rs
// =============================================================================
// site-mapper: crawl one website and map its link structure.
//
// The library is split the same way the data flows:
// - config: what to crawl and how (depth, concurrency, timeout, delay)
// - fetch:  how to load one page and list its links
// - crawl:  the scheduler that drives fetches until the site is exhausted
// - output: JSON / CSV / TXT / tree files built from the result
// - logging: console + log file setup
// - app:    one full run (startup, crawl, output) glued from the above
//
// The binary (src/main.rs) is a small CLI on top of app::run.
// =============================================================================

#[macro_use]
extern crate log;

pub mod app;
pub mod config;
pub mod crawl;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod output;

pub use app::RunOptions;
pub use config::{CrawlConfig, DelayRange};
pub use crawl::{crawl_website, CrawlResult};
pub use error::{ConfigError, FetchError};
pub use fetch::{Fetch, HttpFetcher, Page};
