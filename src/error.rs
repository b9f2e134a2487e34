// src/error.rs
// =============================================================================
// Error types for the crawler library.
//
// Two families:
// - FetchError: one page could not be fetched. Never fatal to the crawl, the
//   page is recorded with no links and we move on.
// - ConfigError: the crawl cannot even start (bad start URL, zero
//   concurrency, ...). Fatal.
//
// The binary uses anyhow on top of these, like the rest of the CLI code.
//
// Rust concepts:
// - thiserror: derive std::error::Error + Display from attributes
// - #[from]: automatic conversion so the ? operator works
// =============================================================================

use std::time::Duration;
use thiserror::Error;

// Why a single page fetch failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// The fetch did not finish within the configured timeout
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    /// Network, TLS, redirect or body decoding failure from the HTTP client
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The URL handed to the fetcher could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Anything else, including a panic inside the fetcher
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

// Why a crawl configuration was rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid start url '{url}': {source}")]
    InvalidStartUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("start url has no host: {0}")]
    MissingHost(String),

    #[error("concurrency limit must be at least 1")]
    ZeroConcurrency,

    #[error("user agent pool is empty")]
    NoUserAgents,

    #[error("minimum delay {min:?} is greater than maximum delay {max:?}")]
    InvertedDelay { min: Duration, max: Duration },
}
