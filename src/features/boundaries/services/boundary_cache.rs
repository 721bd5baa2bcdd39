use std::mem::size_of;
use std::sync::Arc;

use lru::LruCache;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::core::config::CacheConfig;
use crate::features::boundaries::models::{BoundaryPayload, CacheKey};
use crate::shared::constants::BYTES_PER_MB;

struct CachedBoundary {
    payload: Arc<BoundaryPayload>,
    size_bytes: usize,
}

#[derive(Debug, Default, Clone, Copy)]
struct CacheCounters {
    total_requests: u64,
    hits: u64,
    misses: u64,
    evictions: u64,
}

struct CacheState {
    entries: LruCache<CacheKey, CachedBoundary>,
    memory_bytes: usize,
    counters: CacheCounters,
}

impl CacheState {
    fn evict_lru(&mut self) -> bool {
        match self.entries.pop_lru() {
            Some((key, evicted)) => {
                self.memory_bytes = self.memory_bytes.saturating_sub(evicted.size_bytes);
                self.counters.evictions += 1;
                tracing::info!(
                    "Evicted LRU boundary {} ({} entries left)",
                    key,
                    self.entries.len()
                );
                true
            }
            None => false,
        }
    }
}

/// Point-in-time view of the cache
#[derive(Debug, Clone)]
pub struct CacheStats {
    pub total_requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// `hits / total_requests`, 0 when there were no requests
    pub hit_rate: f64,
    pub item_count: usize,
    pub max_items: usize,
    /// `item_count / max_items`
    pub utilization: f64,
    pub estimated_memory_mb: f64,
    pub max_memory_mb: f64,
    pub memory_utilization: f64,
    /// Cached keys from least to most recently used
    pub keys: Vec<CacheKey>,
}

/// Bounded LRU cache of region boundaries
///
/// Two ceilings are enforced before every insert, in order:
/// 1. item count: while `len >= max_items`, drop the least recently used entry;
/// 2. estimated memory: while the estimate exceeds `max_memory_bytes`, drop a
///    batch of `eviction_percent`% of the entries (at least one), oldest first.
///
/// All state lives behind one mutex so membership checks, recency updates
/// and eviction decisions never interleave.
pub struct BoundaryCache {
    state: Mutex<CacheState>,
    max_items: usize,
    max_memory_bytes: usize,
    eviction_percent: usize,
}

impl BoundaryCache {
    pub fn new(config: &CacheConfig) -> Self {
        Self {
            state: Mutex::new(CacheState {
                entries: LruCache::unbounded(),
                memory_bytes: 0,
                counters: CacheCounters::default(),
            }),
            max_items: config.max_items.max(1),
            max_memory_bytes: config.max_memory_bytes,
            eviction_percent: config.eviction_percent.clamp(1, 100),
        }
    }

    /// Look up a boundary, promoting it to most recently used on a hit
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<BoundaryPayload>> {
        let mut state = self.state.lock().await;
        state.counters.total_requests += 1;

        let hit = state
            .entries
            .get(key)
            .map(|cached| Arc::clone(&cached.payload));

        match hit {
            Some(payload) => {
                state.counters.hits += 1;
                tracing::debug!("Boundary cache hit: {}", key);
                Some(payload)
            }
            None => {
                state.counters.misses += 1;
                tracing::debug!("Boundary cache miss: {}", key);
                None
            }
        }
    }

    /// Store a boundary as most recently used, evicting as needed first
    ///
    /// Overwriting an existing key replaces its value in place of the old
    /// entry, so it never pushes out another entry on the count ceiling.
    pub async fn put(&self, key: CacheKey, payload: BoundaryPayload) -> Arc<BoundaryPayload> {
        let size_bytes = estimate_entry_size(&key, &payload);
        let payload = Arc::new(payload);

        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        if let Some(previous) = state.entries.pop(&key) {
            state.memory_bytes = state.memory_bytes.saturating_sub(previous.size_bytes);
        }

        self.enforce_item_limit(state);
        self.enforce_memory_limit(state);

        state.memory_bytes += size_bytes;
        state.entries.push(
            key.clone(),
            CachedBoundary {
                payload: Arc::clone(&payload),
                size_bytes,
            },
        );
        tracing::info!(
            "Cached boundary {} ({} entries, {:.2}MB)",
            key,
            state.entries.len(),
            to_mb(state.memory_bytes)
        );

        payload
    }

    fn enforce_item_limit(&self, state: &mut CacheState) {
        if state.entries.len() >= self.max_items {
            tracing::warn!(
                "Boundary cache item limit reached: {}/{}",
                state.entries.len(),
                self.max_items
            );
        }

        while state.entries.len() >= self.max_items {
            if !state.evict_lru() {
                break;
            }
        }
    }

    fn enforce_memory_limit(&self, state: &mut CacheState) {
        while state.memory_bytes > self.max_memory_bytes && !state.entries.is_empty() {
            let batch = (state.entries.len() * self.eviction_percent)
                .div_ceil(100)
                .max(1);

            tracing::warn!(
                "Boundary cache memory limit reached: {:.2}MB/{:.2}MB, evicting {} entries",
                to_mb(state.memory_bytes),
                to_mb(self.max_memory_bytes),
                batch
            );

            for _ in 0..batch {
                if !state.evict_lru() {
                    break;
                }
            }
        }
    }

    /// Remove every entry, returning how many were removed. Counters are kept.
    pub async fn clear(&self) -> usize {
        let mut state = self.state.lock().await;
        let cleared = state.entries.len();
        state.entries.clear();
        state.memory_bytes = 0;
        tracing::info!("Boundary cache cleared ({} entries)", cleared);
        cleared
    }

    /// Zero the request/hit/miss/eviction counters. Entries are kept.
    pub async fn reset_stats(&self) {
        let mut state = self.state.lock().await;
        state.counters = CacheCounters::default();
        tracing::info!("Boundary cache statistics reset");
    }

    /// Snapshot counters, limits and keys without touching recency order
    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        let counters = state.counters;
        let item_count = state.entries.len();

        CacheStats {
            total_requests: counters.total_requests,
            hits: counters.hits,
            misses: counters.misses,
            evictions: counters.evictions,
            hit_rate: ratio(counters.hits as f64, counters.total_requests as f64),
            item_count,
            max_items: self.max_items,
            utilization: ratio(item_count as f64, self.max_items as f64),
            estimated_memory_mb: to_mb(state.memory_bytes),
            max_memory_mb: to_mb(self.max_memory_bytes),
            memory_utilization: ratio(state.memory_bytes as f64, self.max_memory_bytes as f64),
            // lru iterates most recent first
            keys: state.entries.iter().rev().map(|(k, _)| k.clone()).collect(),
        }
    }
}

fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

fn to_mb(bytes: usize) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

/// Approximate in-memory footprint of one cache entry
///
/// Structural estimate: fixed struct sizes plus key bytes plus a walk of
/// the GeoJSON coordinate tree. Not an exact allocator count.
pub(crate) fn estimate_entry_size(key: &CacheKey, payload: &BoundaryPayload) -> usize {
    size_of::<CacheKey>()
        + key.as_str().len()
        + size_of::<CachedBoundary>()
        + size_of::<BoundaryPayload>()
        + json_heap_size(&payload.coordinates)
}

fn json_heap_size(value: &Value) -> usize {
    match value {
        Value::String(s) => s.len(),
        Value::Array(items) => items
            .iter()
            .map(|item| size_of::<Value>() + json_heap_size(item))
            .sum(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| k.len() + size_of::<Value>() + json_heap_size(v))
            .sum(),
        Value::Null | Value::Bool(_) | Value::Number(_) => 0,
    }
}
