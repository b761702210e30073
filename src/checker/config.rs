// src/checker/config.rs
// =============================================================================
// Tuning knobs for the link checker.
//
// One CheckerConfig value is built at startup (from CLI flags and env vars)
// and handed to the Coordinator and the Prober. Nothing here is global.
// =============================================================================

use std::time::Duration;

/// Maximum number of probes in flight at once
pub const DEFAULT_CONCURRENCY: usize = 20;
/// Maximum number of simultaneous requests to a single host
pub const DEFAULT_PER_HOST: usize = 5;
/// Per-request timeout, in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Extra attempts after the first one fails transiently
pub const DEFAULT_RETRIES: u32 = 1;
/// Pause between two attempts on the same target, in seconds
pub const DEFAULT_BACKOFF_SECS: u64 = 2;
/// Log a progress line every this many completed probes
pub const DEFAULT_PROGRESS_INTERVAL: usize = 50;
/// Redirects followed before a request is given up as a transport error
pub const MAX_REDIRECTS: usize = 10;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Global cap on in-flight probes
    pub concurrency: usize,
    /// Cap on in-flight requests per host
    pub per_host: usize,
    /// Timeout applied to every single request
    pub timeout: Duration,
    /// Number of retries; a target gets at most `1 + retries` attempts
    pub retries: u32,
    /// Sleep between attempts
    pub backoff: Duration,
    /// Sent as the User-Agent header with every request
    pub user_agent: String,
    pub progress_interval: usize,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            concurrency: DEFAULT_CONCURRENCY,
            per_host: DEFAULT_PER_HOST,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
            backoff: Duration::from_secs(DEFAULT_BACKOFF_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl CheckerConfig {
    /// Total number of attempts a single target may use
    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}
