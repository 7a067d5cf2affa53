//! Short-lived memoization of generated series

use crate::generator::SeriesGenerator;
use crate::series::HistoricalSeries;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Default time a generated series stays fresh
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    count: usize,
    interval_minutes: u32,
}

#[derive(Debug, Clone)]
struct CacheEntry {
    series: HistoricalSeries,
    inserted_at: Instant,
}

/// TTL-bounded cache of generated series, keyed by generator parameters
///
/// Owned by the caller, one per dashboard session. Entries age on a
/// monotonic clock; an expired entry is replaced on the next lookup.
/// Purely a refresh-rate optimization, never a correctness requirement.
#[derive(Debug, Clone)]
pub struct SeriesCache {
    ttl: Duration,
    entries: HashMap<CacheKey, CacheEntry>,
}

impl SeriesCache {
    /// Create a cache with the given time-to-live
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Create a cache with the default 60 second time-to-live
    pub fn with_default_ttl() -> Self {
        Self::new(DEFAULT_CACHE_TTL)
    }

    /// Configured time-to-live
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Number of cached series
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the cache holds no series
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the cached series for this generator's parameters, or
    /// generate and cache a fresh one
    pub fn get_or_generate(&mut self, generator: &SeriesGenerator) -> HistoricalSeries {
        let key = CacheKey {
            count: generator.count(),
            interval_minutes: generator.interval_minutes(),
        };

        if let Some(entry) = self.entries.get(&key) {
            if entry.inserted_at.elapsed() < self.ttl {
                log::debug!(
                    "series cache hit for {} points at {} minute spacing",
                    key.count,
                    key.interval_minutes
                );
                return entry.series.clone();
            }

            log::debug!(
                "series cache entry expired for {} points at {} minute spacing",
                key.count,
                key.interval_minutes
            );
        } else {
            log::debug!(
                "series cache miss for {} points at {} minute spacing",
                key.count,
                key.interval_minutes
            );
        }

        let series = generator.generate();
        self.entries.insert(
            key,
            CacheEntry {
                series: series.clone(),
                inserted_at: Instant::now(),
            },
        );

        series
    }

    /// Drop every cached series
    pub fn invalidate(&mut self) {
        self.entries.clear();
    }
}

impl Default for SeriesCache {
    fn default() -> Self {
        Self::with_default_ttl()
    }
}
