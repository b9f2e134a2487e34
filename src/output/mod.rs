// src/output/mod.rs
// =============================================================================
// Writes the crawl result to disk.
//
// Four independent artifacts, all in the output directory:
// - url_structure.json: page URL -> outbound links
// - scraped_urls.csv:   visited URLs under a `URL` header
// - scraped_urls.txt:   visited URLs, one per line
// - url_tree.txt:       the link graph drawn as a tree from the start page
//
// A writer that fails is logged and skipped. It never stops the others.
//
// Submodules:
// - json, csv, text: one function per file format
// - tree: the tree renderer used by url_tree.txt
// =============================================================================

mod csv;
mod json;
mod text;
mod tree;

use anyhow::Result;
use std::path::Path;

use crate::crawl::CrawlResult;

pub use self::csv::write_csv;
pub use self::json::write_json;
pub use self::text::{write_tree, write_txt};
pub use self::tree::{render_from, render_tree};

pub const JSON_FILE: &str = "url_structure.json";
pub const CSV_FILE: &str = "scraped_urls.csv";
pub const TXT_FILE: &str = "scraped_urls.txt";
pub const TREE_FILE: &str = "url_tree.txt";

type Writer = fn(&CrawlResult, &Path) -> Result<()>;

// Runs every writer and returns how many of them failed
pub fn write_all(result: &CrawlResult, dir: &Path) -> usize {
    let writers: [(&str, Writer); 4] = [
        (JSON_FILE, write_json),
        (CSV_FILE, write_csv),
        (TXT_FILE, write_txt),
        (TREE_FILE, write_tree),
    ];

    let mut failures = 0;
    for (file_name, write) in writers {
        let path = dir.join(file_name);
        match write(result, &path) {
            Ok(()) => info!("Data saved to {}.", path.display()),
            Err(e) => {
                error!("Error writing to {}: {:#}", path.display(), e);
                failures += 1;
            }
        }
    }
    failures
}
