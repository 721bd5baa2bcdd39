use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::boundaries::models::CacheKey;
use crate::features::regions::models::{RegionCatalogEntry, RegionLevel};

/// Query parameters for listing regions
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct RegionSearchQuery {
    /// Filter by name (partial match)
    #[param(example = "분당")]
    pub search: Option<String>,
}

impl RegionSearchQuery {
    pub fn matches(&self, entry: &RegionCatalogEntry) -> bool {
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => entry.name.contains(term),
            _ => true,
        }
    }
}

/// Response DTO for a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegionResponseDto {
    #[schema(example = "4113500000")]
    pub code: String,
    #[schema(example = "성남시 분당구")]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

impl From<&RegionCatalogEntry> for RegionResponseDto {
    fn from(entry: &RegionCatalogEntry) -> Self {
        Self {
            code: entry.code.clone(),
            name: entry.name.clone(),
            parent_code: entry.parent_code.clone(),
        }
    }
}

/// Response DTO for a resolved region request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolvedRegionDto {
    pub level: RegionLevel,
    #[schema(example = "4113500000")]
    pub code: String,
    /// Key under which the region's boundary is cached
    #[schema(example = "sub_district:4113500000")]
    pub cache_key: String,
}

impl ResolvedRegionDto {
    pub fn new(level: RegionLevel, code: String) -> Self {
        let cache_key = CacheKey::new(level, &code).to_string();
        Self {
            level,
            code,
            cache_key,
        }
    }
}
