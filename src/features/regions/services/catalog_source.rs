use std::path::PathBuf;

use serde::Deserialize;

use crate::features::regions::models::{
    CatalogError, RegionCatalog, RegionCatalogEntry, RegionLevel,
};

/// Supplies the region catalog once at startup
pub trait RegionCatalogSource {
    fn load(&self) -> Result<RegionCatalog, CatalogError>;
}

/// On-disk catalog document
///
/// Accepts both `provinces`/`sub_districts`/`neighborhoods` and the
/// `sido`/`sigungu`/`dong` keys of `korea_admin_codes.json`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(alias = "sido")]
    provinces: Vec<RegionCatalogEntry>,
    #[serde(alias = "sigungu")]
    sub_districts: Vec<RegionCatalogEntry>,
    #[serde(alias = "dong")]
    neighborhoods: Vec<RegionCatalogEntry>,
}

/// Loads the catalog from a JSON file
pub struct JsonFileCatalogSource {
    path: PathBuf,
}

impl JsonFileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse and validate a catalog document
    pub fn parse(json: &str) -> Result<RegionCatalog, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        RegionCatalog::new(
            document.provinces,
            document.sub_districts,
            document.neighborhoods,
        )
    }
}

impl RegionCatalogSource for JsonFileCatalogSource {
    fn load(&self) -> Result<RegionCatalog, CatalogError> {
        let raw = std::fs::read_to_string(&self.path)?;
        let catalog = Self::parse(&raw)?;

        tracing::info!(
            "Region catalog loaded from {}: provinces={}, sub_districts={}, neighborhoods={}",
            self.path.display(),
            catalog.len(RegionLevel::Province),
            catalog.len(RegionLevel::SubDistrict),
            catalog.len(RegionLevel::Neighborhood)
        );

        Ok(catalog)
    }
}
