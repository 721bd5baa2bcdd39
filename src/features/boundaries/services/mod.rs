mod boundary_cache;
mod boundary_fetcher;
mod boundary_lookup_service;

pub use boundary_cache::{BoundaryCache, CacheStats};
pub use boundary_fetcher::{BoundaryFetcher, SupabaseBoundaryFetcher};
pub use boundary_lookup_service::BoundaryLookupService;
