// src/config.rs
// =============================================================================
// The crawl configuration.
//
// A CrawlConfig is built once from the command line, validated, and then never
// changes while the crawl runs. It carries:
// - the normalized start URL and the host we are allowed to stay on
// - the maximum depth (pages at or beyond it are recorded but not expanded)
// - the concurrency limit for in-flight fetches
// - the per-fetch timeout
// - the politeness delay range applied before every fetch
// - the pool of user agents, one drawn at random for every fetch
//
// Rust concepts:
// - Builder pattern: optional settings with defaults, validated in build()
// - Duration: std's type for time spans
// =============================================================================

use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;
use url::Url;

use crate::error::ConfigError;
use crate::fetch::normalize_url;

pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_CONCURRENCY: usize = 10;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MIN_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_secs(3);

// Desktop browser user agents we rotate through
pub const DEFAULT_USER_AGENTS: [&str; 4] = [
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/92.0.4515.107 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:90.0) Gecko/20100101 Firefox/90.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.114 Safari/537.36",
];

// Random delay drawn from [min, max) before each fetch
//
// Every call to sample() draws independently from the thread-local RNG, so
// concurrent fetches share no RNG state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    min: Duration,
    max: Duration,
}

impl DelayRange {
    pub fn new(min: Duration, max: Duration) -> Result<Self, ConfigError> {
        if min > max {
            return Err(ConfigError::InvertedDelay { min, max });
        }
        Ok(DelayRange { min, max })
    }

    /// A fixed delay, mostly useful in tests
    pub fn fixed(delay: Duration) -> Self {
        DelayRange {
            min: delay,
            max: delay,
        }
    }

    /// No delay at all
    pub fn none() -> Self {
        Self::fixed(Duration::ZERO)
    }

    pub fn min(&self) -> Duration {
        self.min
    }

    pub fn max(&self) -> Duration {
        self.max
    }

    pub fn sample(&self) -> Duration {
        if self.min >= self.max {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..self.max)
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        DelayRange {
            min: DEFAULT_MIN_DELAY,
            max: DEFAULT_MAX_DELAY,
        }
    }
}

// Immutable settings for one crawl run
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    start_url: String,
    host: String,
    port: Option<u16>,
    max_depth: usize,
    concurrency: usize,
    timeout: Duration,
    delay: DelayRange,
    user_agents: Vec<String>,
}

impl CrawlConfig {
    // Starts a builder with every optional setting at its default
    pub fn builder(start_url: &str) -> CrawlConfigBuilder {
        CrawlConfigBuilder {
            start_url: start_url.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            delay: DelayRange::default(),
            user_agents: DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }

    /// The normalized start URL, which is also the key the seed page is
    /// scheduled under
    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn delay(&self) -> DelayRange {
        self.delay
    }

    pub fn user_agents(&self) -> &[String] {
        &self.user_agents
    }

    // Draws the user agent for one fetch. The pool is never empty, build()
    // rejects that.
    pub fn pick_user_agent(&self) -> &str {
        self.user_agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(DEFAULT_USER_AGENTS[0])
    }

    // True when `link` points at exactly the start URL's host and port.
    // Subdomains do not count, and unparsable links never match.
    pub fn is_same_site(&self, link: &str) -> bool {
        match Url::parse(link) {
            Ok(url) => url.host_str() == Some(self.host.as_str()) && url.port() == self.port,
            Err(_) => false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CrawlConfigBuilder {
    start_url: String,
    max_depth: usize,
    concurrency: usize,
    timeout: Duration,
    delay: DelayRange,
    user_agents: Vec<String>,
}

impl CrawlConfigBuilder {
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn delay(mut self, delay: DelayRange) -> Self {
        self.delay = delay;
        self
    }

    pub fn user_agents<I, S>(mut self, user_agents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.user_agents = user_agents.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> Result<CrawlConfig, ConfigError> {
        let url = Url::parse(&self.start_url).map_err(|source| ConfigError::InvalidStartUrl {
            url: self.start_url.clone(),
            source,
        })?;

        let host = url
            .host_str()
            .ok_or_else(|| ConfigError::MissingHost(self.start_url.clone()))?
            .to_string();

        if self.concurrency == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        if self.user_agents.is_empty() {
            return Err(ConfigError::NoUserAgents);
        }

        Ok(CrawlConfig {
            start_url: normalize_url(&url),
            host,
            port: url.port(),
            max_depth: self.max_depth,
            concurrency: self.concurrency,
            timeout: self.timeout,
            delay: self.delay,
            user_agents: self.user_agents,
        })
    }
}
