//! Lookup metrics for the translation store.
//!
//! Counts typed lookups and raw-key lookups, and how many raw lookups fell
//! back to the key itself. A high fallback count means some caller is
//! asking for strings the table does not have.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counters owned by a [`TranslationStore`](crate::i18n::TranslationStore).
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups through a typed `TranslationKey`
    lookups: AtomicUsize,

    /// Lookups through an untyped wire name
    raw_lookups: AtomicUsize,

    /// Raw lookups (or partial entries) that returned the key verbatim
    fallbacks: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_raw_lookup(&self) {
        self.raw_lookups.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    pub fn raw_lookups(&self) -> usize {
        self.raw_lookups.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let raw_lookups = self.raw_lookups();
        let fallbacks = self.fallbacks();
        let total = lookups + raw_lookups;
        let fallback_rate = if total > 0 {
            (fallbacks as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            raw_lookups,
            fallbacks,
            fallback_rate,
        }
    }
}

/// Point-in-time snapshot of lookup metrics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub lookups: usize,
    pub raw_lookups: usize,
    pub fallbacks: usize,
    /// Percentage of all lookups that fell back to the key
    pub fallback_rate: f64,
}

impl MetricsReport {
    /// Format the report as a one-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "lookups={} raw_lookups={} fallbacks={} fallback_rate={:.1}%",
            self.lookups, self.raw_lookups, self.fallbacks, self.fallback_rate
        )
    }
}
