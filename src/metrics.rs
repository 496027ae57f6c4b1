use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Performance metrics for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub logins_succeeded: Arc<AtomicUsize>,
    pub logins_failed: Arc<AtomicUsize>,
    pub token_refreshes: Arc<AtomicUsize>,
    pub listings_served: Arc<AtomicU64>,
    pub searches_served: Arc<AtomicU64>,
    pub entries_served: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            logins_succeeded: Arc::new(AtomicUsize::new(0)),
            logins_failed: Arc::new(AtomicUsize::new(0)),
            token_refreshes: Arc::new(AtomicUsize::new(0)),
            listings_served: Arc::new(AtomicU64::new(0)),
            searches_served: Arc::new(AtomicU64::new(0)),
            entries_served: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_logins_succeeded(&self) {
        self.logins_succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_logins_failed(&self) {
        self.logins_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_token_refreshes(&self) {
        self.token_refreshes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_listings_served(&self) {
        self.listings_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_searches_served(&self) {
        self.searches_served.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_entries_served(&self, count: u64) {
        self.entries_served.fetch_add(count, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            logins_succeeded: self.logins_succeeded.load(Ordering::Relaxed),
            logins_failed: self.logins_failed.load(Ordering::Relaxed),
            token_refreshes: self.token_refreshes.load(Ordering::Relaxed),
            listings_served: self.listings_served.load(Ordering::Relaxed),
            searches_served: self.searches_served.load(Ordering::Relaxed),
            entries_served: self.entries_served.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
pub struct MetricsSnapshot {
    pub logins_succeeded: usize,
    pub logins_failed: usize,
    pub token_refreshes: usize,
    pub listings_served: u64,
    pub searches_served: u64,
    pub entries_served: u64,
    pub uptime_seconds: u64,
}
