// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Only the start URL is required. Everything else has a default matching a
// polite, moderately deep crawl:
//   site-mapper https://example.com --max_depth 3
//
// Rust concepts:
// - Derive macros: clap generates the parser from the struct
// - PathBuf: an owned filesystem path
// =============================================================================

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use site_mapper::app::DEFAULT_LOG_FILE;
use site_mapper::config::{DEFAULT_CONCURRENCY, DEFAULT_MAX_DEPTH};
use site_mapper::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version,
    about = "Crawl a website and map its URL structure",
    long_about = "site-mapper crawls a single website from a start URL, stays on the start URL's host, \
                  and writes the link graph as JSON, CSV, plain text and a text tree."
)]
pub struct Cli {
    /// The starting URL to crawl (e.g., https://example.com)
    pub start_url: String,

    /// Maximum crawl depth
    ///
    /// Depth is the number of path segments in a URL: https://example.com is
    /// depth 0, https://example.com/docs/intro is depth 2. Pages at this depth
    /// are still recorded, their links are just not followed.
    #[arg(long = "max_depth", visible_alias = "max-depth", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Maximum number of pages fetched at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Per-page timeout, in seconds
    #[arg(long = "timeout", default_value_t = 10)]
    pub timeout_secs: u64,

    /// Minimum random delay before each request, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub min_delay_ms: u64,

    /// Maximum random delay before each request, in milliseconds (exclusive)
    #[arg(long, default_value_t = 3000)]
    pub max_delay_ms: u64,

    /// Directory the result files are written to
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Log file, truncated at every run
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

impl Cli {
    // Converts the raw arguments; validation happens when the run starts
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            start_url: self.start_url.clone(),
            max_depth: self.max_depth,
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout_secs),
            min_delay: Duration::from_millis(self.min_delay_ms),
            max_delay: Duration::from_millis(self.max_delay_ms),
            output_dir: self.output_dir.clone(),
            log_file: self.log_file.clone(),
        }
    }
}
