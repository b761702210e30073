// src/checker/testing.rs
// =============================================================================
// An in-memory Transport for unit tests.
//
// Each request is answered by a closure that sees the method, the URL and how
// many times that same (method, URL) pair was requested before. The transport
// records every call and the peak number of concurrent requests, overall and
// per host.
// =============================================================================

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::transport::{ProbeMethod, Reply, Transport, TransportError};

type Responder = Box<dyn Fn(ProbeMethod, &str, usize) -> Result<Reply, TransportError> + Send + Sync>;

#[derive(Default)]
struct Gauge {
    total: usize,
    peak_total: usize,
    hosts: HashMap<String, usize>,
    peak_per_host: usize,
}

pub(crate) struct ScriptedTransport {
    responder: Responder,
    delay: Duration,
    calls: Mutex<Vec<(ProbeMethod, String)>>,
    gauge: Mutex<Gauge>,
}

impl ScriptedTransport {
    pub(crate) fn new<F>(responder: F) -> Self
    where
        F: Fn(ProbeMethod, &str, usize) -> Result<Reply, TransportError> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(responder),
            delay: Duration::ZERO,
            calls: Mutex::new(Vec::new()),
            gauge: Mutex::new(Gauge::default()),
        }
    }

    // Every request sleeps this long before answering
    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub(crate) fn calls(&self, method: ProbeMethod, url: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(m, u)| *m == method && u == url)
            .count()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub(crate) fn peak_in_flight(&self) -> usize {
        self.gauge.lock().unwrap().peak_total
    }

    pub(crate) fn peak_per_host(&self) -> usize {
        self.gauge.lock().unwrap().peak_per_host
    }
}

pub(crate) fn reply(status: u16) -> Result<Reply, TransportError> {
    Ok(Reply { status, reason: None })
}

fn host_of(url: &str) -> String {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, method: ProbeMethod, url: &str) -> Result<Reply, TransportError> {
        let seen = {
            let mut calls = self.calls.lock().unwrap();
            let seen = calls.iter().filter(|(m, u)| *m == method && u == url).count();
            calls.push((method, url.to_string()));
            seen
        };

        let host = host_of(url);
        {
            let mut gauge = self.gauge.lock().unwrap();
            gauge.total += 1;
            gauge.peak_total = gauge.peak_total.max(gauge.total);
            let count = gauge.hosts.entry(host.clone()).or_insert(0);
            *count += 1;
            let count = *count;
            gauge.peak_per_host = gauge.peak_per_host.max(count);
        }

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        {
            let mut gauge = self.gauge.lock().unwrap();
            gauge.total -= 1;
            if let Some(count) = gauge.hosts.get_mut(&host) {
                *count -= 1;
            }
        }

        (self.responder)(method, url, seen)
    }
}
