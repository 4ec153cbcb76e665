//! Resolution metrics and observability module.
//!
//! This module tracks how multilingual text is being resolved: how often
//! the preferred language is missing and the first available one is used
//! instead, how often texts carry no language segments at all, and how
//! often the locale provider fails.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global resolution metrics singleton.
pub struct ResolutionMetrics {
    /// Number of texts resolved
    resolutions: AtomicUsize,

    /// Number of texts returned unchanged because they had no segments
    passthroughs: AtomicUsize,

    /// Number of texts resolved with fallback-to-first-available
    fallbacks: AtomicUsize,

    /// Number of failed current-language reads
    locale_failures: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<ResolutionMetrics> = OnceLock::new();

impl ResolutionMetrics {
    /// Get the global resolution metrics instance.
    pub fn global() -> &'static ResolutionMetrics {
        METRICS.get_or_init(|| ResolutionMetrics {
            resolutions: AtomicUsize::new(0),
            passthroughs: AtomicUsize::new(0),
            fallbacks: AtomicUsize::new(0),
            locale_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_resolution(&self) {
        self.resolutions.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_passthrough(&self) {
        self.passthroughs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_locale_failure(&self) {
        self.locale_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn resolutions(&self) -> usize {
        self.resolutions.load(Ordering::Relaxed)
    }

    pub fn passthroughs(&self) -> usize {
        self.passthroughs.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn locale_failures(&self) -> usize {
        self.locale_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    ///
    /// The fallback rate is computed over texts that actually contained
    /// segments; passthroughs are excluded from the denominator.
    pub fn report(&self) -> MetricsReport {
        let resolutions = self.resolutions();
        let passthroughs = self.passthroughs();
        let fallbacks = self.fallbacks();

        let with_segments = resolutions.saturating_sub(passthroughs);
        let fallback_rate = if with_segments > 0 {
            (fallbacks as f64 / with_segments as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            resolutions,
            passthroughs,
            fallbacks,
            fallback_rate,
            locale_failures: self.locale_failures(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.resolutions.store(0, Ordering::Relaxed);
        self.passthroughs.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.locale_failures.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current resolution statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of texts resolved
    pub resolutions: usize,

    /// Number of texts without any language segment
    pub passthroughs: usize,

    /// Number of texts where the preferred language was missing
    pub fallbacks: usize,

    /// Fallback rate as a percentage (0-100) of texts with segments
    pub fallback_rate: f64,

    /// Number of failed locale reads
    pub locale_failures: usize,
}
