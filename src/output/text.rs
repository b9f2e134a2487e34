// src/output/text.rs
// Plain text outputs: the visited URL list and the rendered link tree.

use anyhow::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use super::tree::render_tree;
use crate::crawl::CrawlResult;

// One visited URL per line
pub fn write_txt(result: &CrawlResult, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for url in result.sorted_visited() {
        writeln!(writer, "{}", url)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_tree(result: &CrawlResult, path: &Path) -> Result<()> {
    fs::write(path, render_tree(result))?;
    Ok(())
}
