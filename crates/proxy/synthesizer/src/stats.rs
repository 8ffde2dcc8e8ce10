//! Synthesizer counters

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Live counters shared by a synthesizer and the types it produced
#[derive(Debug, Default)]
pub struct SynthesizerStats {
    syntheses: AtomicU64,
    cache_hits: AtomicU64,
    discarded_factories: AtomicU64,
    instances: AtomicU64,
    conformance_failures: AtomicU64,
}

impl SynthesizerStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_synthesis(&self) {
        self.syntheses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_discarded_factory(&self) {
        self.discarded_factories.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_instance(&self) {
        self.instances.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_conformance_failure(&self) {
        self.conformance_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            syntheses: self.syntheses.load(Ordering::Relaxed),
            cache_hits: self.cache_hits.load(Ordering::Relaxed),
            discarded_factories: self.discarded_factories.load(Ordering::Relaxed),
            instances: self.instances.load(Ordering::Relaxed),
            conformance_failures: self.conformance_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`SynthesizerStats`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Proxy types built (cache misses)
    pub syntheses: u64,
    /// Requests answered from the cache
    pub cache_hits: u64,
    /// Cache hits whose factory differed from the bound one
    pub discarded_factories: u64,
    /// Proxy instances constructed successfully
    pub instances: u64,
    /// Instantiations rejected because the target did not conform
    pub conformance_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_records() {
        let stats = SynthesizerStats::new();
        stats.record_synthesis();
        stats.record_cache_hit();
        stats.record_cache_hit();
        stats.record_discarded_factory();
        stats.record_instance();

        assert_eq!(
            stats.snapshot(),
            StatsSnapshot {
                syntheses: 1,
                cache_hits: 2,
                discarded_factories: 1,
                instances: 1,
                conformance_failures: 0,
            }
        );
    }
}
