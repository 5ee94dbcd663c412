//! Observability and Metrics
//!
//! Counters for the rewriting paths: item patching, table loading and
//! channel dispatch.
//!
//! Uses atomic counters for thread-safe metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Metrics collector for compatibility rewriting
#[derive(Debug)]
pub struct Metrics {
    /// Items run through the patcher
    pub items_patched: AtomicU64,
    /// Items that received tool properties from the table
    pub tool_rules_applied: AtomicU64,
    /// Tool table entries loaded
    pub table_entries_loaded: AtomicU64,
    /// Tool table entries whose version never resolved
    pub table_entries_skipped: AtomicU64,
    /// Payloads claimed by a handler
    pub payloads_claimed: AtomicU64,
    /// Claimed payloads whose data changed
    pub payloads_rewritten: AtomicU64,
    /// Payloads no handler claimed
    pub payloads_unclaimed: AtomicU64,
    /// Malformed brands replaced by the placeholder
    pub brand_placeholders: AtomicU64,
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            items_patched: AtomicU64::new(0),
            tool_rules_applied: AtomicU64::new(0),
            table_entries_loaded: AtomicU64::new(0),
            table_entries_skipped: AtomicU64::new(0),
            payloads_claimed: AtomicU64::new(0),
            payloads_rewritten: AtomicU64::new(0),
            payloads_unclaimed: AtomicU64::new(0),
            brand_placeholders: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn item_patched(&self) {
        self.items_patched.fetch_add(1, Ordering::Relaxed);
    }

    pub fn tool_rule_applied(&self) {
        self.tool_rules_applied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn table_entry_loaded(&self) {
        self.table_entries_loaded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn table_entry_skipped(&self) {
        self.table_entries_skipped.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a claimed payload, and whether the handler changed it
    pub fn payload_claimed(&self, rewritten: bool) {
        self.payloads_claimed.fetch_add(1, Ordering::Relaxed);
        if rewritten {
            self.payloads_rewritten.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn payload_unclaimed(&self) {
        self.payloads_unclaimed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn brand_placeholder_substituted(&self) {
        self.brand_placeholders.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            items_patched: self.items_patched.load(Ordering::Relaxed),
            tool_rules_applied: self.tool_rules_applied.load(Ordering::Relaxed),
            table_entries_loaded: self.table_entries_loaded.load(Ordering::Relaxed),
            table_entries_skipped: self.table_entries_skipped.load(Ordering::Relaxed),
            payloads_claimed: self.payloads_claimed.load(Ordering::Relaxed),
            payloads_rewritten: self.payloads_rewritten.load(Ordering::Relaxed),
            payloads_unclaimed: self.payloads_unclaimed.load(Ordering::Relaxed),
            brand_placeholders: self.brand_placeholders.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            items_patched = snapshot.items_patched,
            tool_rules_applied = snapshot.tool_rules_applied,
            table_entries_loaded = snapshot.table_entries_loaded,
            table_entries_skipped = snapshot.table_entries_skipped,
            payloads_claimed = snapshot.payloads_claimed,
            payloads_rewritten = snapshot.payloads_rewritten,
            payloads_unclaimed = snapshot.payloads_unclaimed,
            brand_placeholders = snapshot.brand_placeholders,
            uptime_seconds = snapshot.uptime_seconds,
            "Compatibility metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub items_patched: u64,
    pub tool_rules_applied: u64,
    pub table_entries_loaded: u64,
    pub table_entries_skipped: u64,
    pub payloads_claimed: u64,
    pub payloads_rewritten: u64,
    pub payloads_unclaimed: u64,
    pub brand_placeholders: u64,
    pub uptime_seconds: u64,
}

static METRICS: once_cell::sync::Lazy<Metrics> = once_cell::sync::Lazy::new(Metrics::new);

/// Get the global metrics instance
pub fn global_metrics() -> &'static Metrics {
    &METRICS
}

/// Timer for measuring operation duration
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start timing an operation
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_ms = duration.as_millis() as u64,
            "Operation completed"
        );
    }
}
