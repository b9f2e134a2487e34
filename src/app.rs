// src/app.rs
// =============================================================================
// One run of the tool, start to finish.
//
// 1. Set up logging (console + log file)
// 2. Build the crawl configuration and the page fetcher
// 3. Crawl the website
// 4. Write the result files
//
// Steps 1 and 2 are startup: if either fails, run() returns the error before
// a single output file is written, and the caller treats it as critical.
// From step 3 on nothing is fatal anymore: failed pages are recorded as
// pages without links, and failed output files are logged one by one.
// =============================================================================

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{
    CrawlConfig, DelayRange, DEFAULT_CONCURRENCY, DEFAULT_MAX_DELAY, DEFAULT_MAX_DEPTH,
    DEFAULT_MIN_DELAY, DEFAULT_TIMEOUT,
};
use crate::crawl::{crawl_website, CrawlResult};
use crate::error::{ConfigError, FetchError};
use crate::fetch::{Fetch, HttpFetcher};
use crate::logging;
use crate::output;

pub const DEFAULT_LOG_FILE: &str = "scraper.log";

// Everything one run needs, as given on the command line (not validated yet)
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub start_url: String,
    pub max_depth: usize,
    pub concurrency: usize,
    pub timeout: Duration,
    pub min_delay: Duration,
    pub max_delay: Duration,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
}

impl RunOptions {
    pub fn new(start_url: impl Into<String>) -> Self {
        RunOptions {
            start_url: start_url.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: DEFAULT_TIMEOUT,
            min_delay: DEFAULT_MIN_DELAY,
            max_delay: DEFAULT_MAX_DELAY,
            output_dir: PathBuf::from("."),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    // Validates the options into a crawl configuration
    pub fn crawl_config(&self) -> Result<CrawlConfig, ConfigError> {
        let delay = DelayRange::new(self.min_delay, self.max_delay)?;

        CrawlConfig::builder(&self.start_url)
            .max_depth(self.max_depth)
            .concurrency(self.concurrency)
            .timeout(self.timeout)
            .delay(delay)
            .build()
    }
}

// Installs the logger, then crawls with the HTTP fetcher and saves the result
//
// Returns Err only for startup failures; a completed crawl is always Ok.
pub async fn run(options: &RunOptions) -> Result<CrawlResult> {
    logging::init(&options.log_file)?;
    crawl_and_save(options, HttpFetcher::new).await
}

// Everything after logging setup, with the fetcher supplied by the caller
//
// `make_fetcher` is only called once the configuration is known to be valid.
pub async fn crawl_and_save<F, M>(options: &RunOptions, make_fetcher: M) -> Result<CrawlResult>
where
    F: Fetch,
    M: FnOnce() -> Result<F, FetchError>,
{
    info!("Scan started for: {}", options.start_url);

    let config = options
        .crawl_config()
        .context("invalid crawl configuration")?;
    let fetcher = make_fetcher().context("could not initialize the page fetcher")?;

    let result = crawl_website(&fetcher, &config).await;

    info!("Scan complete. Found {} unique URLs.", result.visited().len());

    info!("Saving data...");
    let failures = output::write_all(&result, &options.output_dir);
    if failures > 0 {
        info!("{} output file(s) could not be written.", failures);
    }

    info!("All operations completed.");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::Page;
    use async_trait::async_trait;
    use rand::{distributions::Alphanumeric, thread_rng, Rng};
    use std::fs;
    use std::path::Path;

    // A one-page site: every URL is a page without links
    struct SinglePage;

    #[async_trait]
    impl Fetch for SinglePage {
        async fn fetch(&self, url: &str, _user_agent: &str) -> Result<Page, FetchError> {
            Ok(Page {
                final_url: url.to_string(),
                links: Vec::new(),
            })
        }
    }

    fn tmp_dir() -> PathBuf {
        let name: String = thread_rng()
            .sample_iter(&Alphanumeric)
            .take(11)
            .map(char::from)
            .collect();
        let path = std::env::temp_dir().join(format!("site-mapper-run-{}", name));
        fs::create_dir(&path).unwrap();
        path
    }

    fn file_count(dir: &Path) -> usize {
        fs::read_dir(dir).unwrap().count()
    }

    fn options(start_url: &str, output_dir: &Path) -> RunOptions {
        RunOptions {
            min_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            output_dir: output_dir.to_path_buf(),
            ..RunOptions::new(start_url)
        }
    }

    #[test]
    fn test_defaults() {
        let options = RunOptions::new("https://example.com");
        assert_eq!(options.max_depth, 5);
        assert_eq!(options.log_file, PathBuf::from("scraper.log"));

        let config = options.crawl_config().unwrap();
        assert_eq!(config.delay().min(), Duration::from_secs(1));
        assert_eq!(config.delay().max(), Duration::from_secs(3));
        assert_eq!(config.timeout(), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_invalid_start_url_stops_before_any_output() {
        let dir = tmp_dir();
        let mut fetcher_built = false;

        let err = crawl_and_save(&options("not a url", &dir), || {
            fetcher_built = true;
            Ok(SinglePage)
        })
        .await
        .unwrap_err();

        assert!(format!("{:#}", err).contains("invalid crawl configuration"));
        assert!(!fetcher_built);
        assert_eq!(file_count(&dir), 0);
        fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_fetcher_setup_failure_stops_before_any_output() {
        let dir = tmp_dir();

        let err = crawl_and_save(&options("http://example.com", &dir), || {
            Err::<SinglePage, _>(FetchError::Unexpected("no TLS backend".to_string()))
        })
        .await
        .unwrap_err();

        assert!(format!("{:#}", err).contains("could not initialize the page fetcher"));
        assert_eq!(file_count(&dir), 0);
        fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_unopenable_log_file_stops_before_any_output() {
        let dir = tmp_dir();
        let mut options = options("http://example.com", &dir);
        options.log_file = dir.join("no-such-dir").join("scraper.log");

        assert!(run(&options).await.is_err());
        assert_eq!(file_count(&dir), 0);
        fs::remove_dir_all(dir).unwrap();
    }

    #[tokio::test]
    async fn test_completed_crawl_writes_every_file() {
        let dir = tmp_dir();

        let result = crawl_and_save(&options("http://example.com/", &dir), || Ok(SinglePage))
            .await
            .unwrap();

        assert_eq!(result.root(), "http://example.com");
        for file in [
            output::JSON_FILE,
            output::CSV_FILE,
            output::TXT_FILE,
            output::TREE_FILE,
        ] {
            assert!(dir.join(file).is_file(), "{} missing", file);
        }
        assert_eq!(file_count(&dir), 4);
        fs::remove_dir_all(dir).unwrap();
    }
}
