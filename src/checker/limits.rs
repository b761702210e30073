// src/checker/limits.rs
// =============================================================================
// Per-host request limiting.
//
// The global cap on in-flight probes lives in the Coordinator. This module
// adds the second cap: no more than `per_host` requests to the same host at
// the same time. Each host gets its own Semaphore, created the first time
// that host is seen.
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use url::Url;

#[derive(Debug)]
pub struct HostLimiter {
    per_host: usize,
    hosts: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl HostLimiter {
    pub fn new(per_host: usize) -> Self {
        Self {
            // A zero cap would block forever
            per_host: per_host.max(1),
            hosts: Mutex::new(HashMap::new()),
        }
    }

    // Waits for a request slot on the target's host.
    // Returns None when the target has no host to key on (or the semaphore
    // was closed); the request then goes out unthrottled.
    pub async fn acquire(&self, target: &str) -> Option<OwnedSemaphorePermit> {
        let host = host_key(target)?;
        let semaphore = self.semaphore_for(host);
        semaphore.acquire_owned().await.ok()
    }

    fn semaphore_for(&self, host: String) -> Arc<Semaphore> {
        // The lock is only held for the map lookup, never across an await
        let mut hosts = match self.hosts.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(
            hosts
                .entry(host)
                .or_insert_with(|| Arc::new(Semaphore::new(self.per_host))),
        )
    }
}

// "host:port" of a URL, lowercased by the url crate
fn host_key(target: &str) -> Option<String> {
    let url = Url::parse(target).ok()?;
    let host = url.host_str()?;
    Some(match url.port_or_known_default() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    })
}
