// src/output/csv.rs
// One visited URL per row, under a single `URL` header.

use anyhow::Result;
use std::path::Path;

use crate::crawl::CrawlResult;

pub fn write_csv(result: &CrawlResult, path: &Path) -> Result<()> {
    let mut writer = ::csv::Writer::from_path(path)?;
    writer.write_record(["URL"])?;
    for url in result.sorted_visited() {
        writer.write_record([url])?;
    }
    writer.flush()?;
    Ok(())
}
