//! Serve counters surfaced through the status endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    page_loads: AtomicU64,
    component_serves: AtomicU64,
    component_misses: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_page_load(&self) {
        self.page_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_component_serve(&self) {
        self.component_serves.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_component_miss(&self) {
        self.component_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            page_loads: self.page_loads.load(Ordering::Relaxed),
            component_serves: self.component_serves.load(Ordering::Relaxed),
            component_misses: self.component_misses.load(Ordering::Relaxed),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub page_loads: u64,
    pub component_serves: u64,
    pub component_misses: u64,
}
