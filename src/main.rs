// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Collect the documents and deduplicate their external links
// 3. Check every unique link
// 4. Write the CSV report and print a summary (or JSON)
// 5. Exit with proper code (0 = success, 1 = broken links, 2 = error)
// =============================================================================

mod cli;

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use cli::Cli;
use link_sweep::checker::HttpTransport;
use link_sweep::references::{collect_documents, ReferenceMap};
use link_sweep::report::{render_summary, save_csv};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    link_sweep::logging::init(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            // Unexpected errors (unreadable directory, unwritable report) exit with 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = no broken links
//   Ok(1) = broken links found
//   Err   = fatal error
async fn run(cli: Cli) -> Result<i32> {
    let documents = collect_documents(&cli.dir, cli.recursive)?;
    info!("Found {} document(s) in {}", documents.len(), cli.dir.display());

    let references = ReferenceMap::from_documents(&documents);
    info!(
        "Found {} external link references ({} unique URLs)",
        references.total_references(),
        references.len()
    );

    let config = cli.checker_config();
    let transport = HttpTransport::new(&config)?;

    let started = Instant::now();
    let report = link_sweep::sweep(&references, transport, &config).await;
    info!("Done in {:.1}s", started.elapsed().as_secs_f64());

    let report_path = cli.report_path();
    save_csv(&report, &report_path)?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", render_summary(&report, Some(&report_path)));
    }

    Ok(if report.is_clean() { 0 } else { 1 })
}
