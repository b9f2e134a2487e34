// src/logging.rs
// =============================================================================
// Logging setup.
//
// Everything logs through the `log` facade (info!, error!, ...). This module
// installs the backend once, at process start, before the crawl begins:
// - env_logger, default level `info`, overridable with RUST_LOG
// - every line goes to stderr AND to the log file (truncated at start)
// - line format: `<timestamp> - <LEVEL> - <message>`
//
// `log` has no "critical" level, so critical!() logs at error level with a
// dedicated target, and the formatter prints it as CRITICAL. The target
// lives under the crate name, so RUST_LOG=site_mapper=... covers it too.
//
// Call flush() before the process exits.
// =============================================================================

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::Record;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

pub const CRITICAL_TARGET: &str = "site_mapper::critical";

/// Logs a fatal error. Same as `error!`, but shown as CRITICAL.
#[macro_export]
macro_rules! critical {
    ($($arg:tt)+) => {
        ::log::error!(target: $crate::logging::CRITICAL_TARGET, $($arg)+)
    };
}

// Duplicates every write to stderr and the log file
struct Tee {
    file: File,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

fn level_label(record: &Record) -> String {
    if record.target() == CRITICAL_TARGET {
        "CRITICAL".to_string()
    } else {
        record.level().to_string()
    }
}

// One log line, without the trailing newline
fn format_line(timestamp: impl std::fmt::Display, record: &Record) -> String {
    format!("{} - {} - {}", timestamp, level_label(record), record.args())
}

fn builder() -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder.format(|buf, record| writeln!(buf, "{}", format_line(buf.timestamp_millis(), record)));
    builder
}

// Installs the logger, writing to the console and to `log_file`
//
// If the log file cannot be created, a console-only logger is installed
// instead and the error is returned, so the caller can still log it.
pub fn init(log_file: &Path) -> Result<()> {
    match File::create(log_file) {
        Ok(file) => {
            builder()
                .target(Target::Pipe(Box::new(Tee { file })))
                .try_init()
                .context("a logger is already installed")?;
            Ok(())
        }
        Err(e) => {
            let _ = builder().target(Target::Stderr).try_init();
            Err(e).with_context(|| format!("could not open log file {}", log_file.display()))
        }
    }
}

pub fn flush() {
    log::logger().flush();
}
