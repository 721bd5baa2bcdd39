use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Tier of the administrative hierarchy a request resolves to
///
/// Ordered top-down, so `level >= RegionLevel::SubDistrict` means the
/// sub-district name is required.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum RegionLevel {
    /// Province / metropolitan city (시/도)
    #[serde(alias = "sido")]
    Province,
    /// City, county or district (시/군/구)
    #[serde(alias = "sigungu")]
    SubDistrict,
    /// Administrative neighborhood (행정동)
    #[serde(alias = "dong")]
    Neighborhood,
}

impl RegionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionLevel::Province => "province",
            RegionLevel::SubDistrict => "sub_district",
            RegionLevel::Neighborhood => "neighborhood",
        }
    }

    /// Level name understood by the remote boundary and census functions
    pub fn upstream_name(&self) -> &'static str {
        match self {
            RegionLevel::Province => "sido",
            RegionLevel::SubDistrict => "sigungu",
            RegionLevel::Neighborhood => "dong",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Hierarchical region request (names, not codes)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionRequest {
    /// Province name
    #[serde(alias = "sido")]
    #[schema(example = "경기도")]
    pub province: String,
    /// Sub-district name, required when level is sub_district or neighborhood
    #[serde(default, alias = "sigungu")]
    #[schema(example = "성남시 분당구")]
    pub sub_district: Option<String>,
    /// Neighborhood name, required when level is neighborhood
    #[serde(default, alias = "dong")]
    #[schema(example = "정자1동")]
    pub neighborhood: Option<String>,
    pub level: RegionLevel,
}

#[cfg(test)]
impl RegionRequest {
    pub fn province(name: &str) -> Self {
        Self {
            province: name.to_string(),
            sub_district: None,
            neighborhood: None,
            level: RegionLevel::Province,
        }
    }

    pub fn sub_district(province: &str, sub_district: &str) -> Self {
        Self {
            province: province.to_string(),
            sub_district: Some(sub_district.to_string()),
            neighborhood: None,
            level: RegionLevel::SubDistrict,
        }
    }

    pub fn neighborhood(province: &str, sub_district: &str, neighborhood: &str) -> Self {
        Self {
            province: province.to_string(),
            sub_district: Some(sub_district.to_string()),
            neighborhood: Some(neighborhood.to_string()),
            level: RegionLevel::Neighborhood,
        }
    }
}

/// One row of the region catalog
///
/// Accepts both the neutral field names and the ones used by the
/// `korea_admin_codes.json` dataset (`cd`, `parent_cd`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionCatalogEntry {
    #[serde(alias = "cd")]
    pub code: String,
    pub name: String,
    #[serde(default, alias = "parent_cd", skip_serializing_if = "Option::is_none")]
    pub parent_code: Option<String>,
}

#[cfg(test)]
impl RegionCatalogEntry {
    pub fn new(code: &str, name: &str, parent_code: Option<&str>) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            parent_code: parent_code.map(str::to_string),
        }
    }
}
