mod catalog_source;
mod region_resolver;

pub use catalog_source::{JsonFileCatalogSource, RegionCatalogSource};
pub use region_resolver::{RegionResolver, ResolveError};
