use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::boundaries::services::CacheStats;

/// Response DTO for boundary cache statistics
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CacheStatsDto {
    pub total_requests: u64,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    /// Fraction of requests served from the cache (0..1)
    pub hit_rate: f64,
    pub item_count: usize,
    pub max_items: usize,
    /// Fraction of `max_items` in use (0..1)
    pub utilization: f64,
    pub estimated_memory_mb: f64,
    pub max_memory_mb: f64,
    pub memory_utilization: f64,
    /// Cached keys, least recently used first
    pub keys: Vec<String>,
}

impl From<CacheStats> for CacheStatsDto {
    fn from(stats: CacheStats) -> Self {
        Self {
            total_requests: stats.total_requests,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            hit_rate: stats.hit_rate,
            item_count: stats.item_count,
            max_items: stats.max_items,
            utilization: stats.utilization,
            estimated_memory_mb: stats.estimated_memory_mb,
            max_memory_mb: stats.max_memory_mb,
            memory_utilization: stats.memory_utilization,
            keys: stats.keys.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClearCacheResponseDto {
    pub cleared_count: usize,
}
