// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Hand them to site_mapper::app::run (logging, crawl, output files)
// 3. Exit with proper code (0 = crawl completed, 2 = could not start)
//
// run() only fails during startup, before any output file is written. That
// is logged as critical here, after which we stop.
// =============================================================================

mod cli;

use clap::Parser;

use cli::Cli;
use site_mapper::{app, critical, logging};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let exit_code = match app::run(&cli.run_options()).await {
        Ok(_) => 0,
        Err(e) => {
            critical!("Critical error during startup: {:#}", e);
            2
        }
    };

    logging::flush();
    std::process::exit(exit_code);
}
