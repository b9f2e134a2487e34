// src/output/json.rs
// The link graph as one JSON object: page URL -> list of outbound URLs.
// Keys are written in sorted order so two runs over the same site diff cleanly.

use anyhow::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::crawl::CrawlResult;

pub fn write_json(result: &CrawlResult, path: &Path) -> Result<()> {
    let sorted: BTreeMap<&str, &Vec<String>> = result
        .links()
        .iter()
        .map(|(url, links)| (url.as_str(), links))
        .collect();

    let mut writer = BufWriter::new(File::create(path)?);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    sorted.serialize(&mut serializer)?;
    writer.flush()?;
    Ok(())
}
