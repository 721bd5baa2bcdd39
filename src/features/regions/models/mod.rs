mod region;
mod region_catalog;

pub use region::{RegionCatalogEntry, RegionLevel, RegionRequest};
pub use region_catalog::{CatalogError, RegionCatalog};
