// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI is a struct, and clap generates the
// parsing code from its fields and #[arg(...)] attributes.
//
// Every tuning knob can also be set through an environment variable
// (the `env = "..."` attributes), which is handy in CI.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::builder::TypedValueParser;
use clap::Parser;

use link_sweep::checker::{
    CheckerConfig, DEFAULT_CONCURRENCY, DEFAULT_PER_HOST, DEFAULT_RETRIES, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT,
};

#[derive(Parser, Debug)]
#[command(
    name = "link-sweep",
    version,
    about = "Scan a directory of HTML and Markdown documents for broken external links",
    long_about = "link-sweep reads every HTML and Markdown document in a directory, collects the \
                  external links they reference, checks each unique URL once, and writes a CSV \
                  report of the broken ones. Exits with 1 when broken links are found."
)]
pub struct Cli {
    /// Directory containing the documents to scan
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Where to write the CSV report (default: <DIR>/broken_links_report.csv)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print the report as JSON instead of the console listing
    #[arg(long)]
    pub json: bool,

    /// Also scan documents in subdirectories
    #[arg(long, short)]
    pub recursive: bool,

    /// Maximum number of URLs checked at the same time
    #[arg(
        long,
        env = "LINK_SWEEP_CONCURRENCY",
        default_value_t = DEFAULT_CONCURRENCY,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub concurrency: usize,

    /// Maximum number of simultaneous requests to one host
    #[arg(
        long,
        env = "LINK_SWEEP_PER_HOST",
        default_value_t = DEFAULT_PER_HOST,
        value_parser = clap::value_parser!(u16).range(1..).map(usize::from)
    )]
    pub per_host: usize,

    /// Per-request timeout in seconds
    #[arg(long, env = "LINK_SWEEP_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Retries after a timeout or connection failure
    #[arg(long, env = "LINK_SWEEP_RETRIES", default_value_t = DEFAULT_RETRIES)]
    pub retries: u32,

    /// User-Agent header sent with every request
    #[arg(long, env = "LINK_SWEEP_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log debug details (retries, per-document link counts)
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    pub fn checker_config(&self) -> CheckerConfig {
        CheckerConfig {
            concurrency: self.concurrency,
            per_host: self.per_host,
            timeout: Duration::from_secs(self.timeout),
            retries: self.retries,
            user_agent: self.user_agent.clone(),
            ..CheckerConfig::default()
        }
    }

    pub fn report_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.dir.join(link_sweep::report::DEFAULT_REPORT_NAME))
    }
}
