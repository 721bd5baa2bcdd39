mod boundary_dto;
mod cache_dto;

pub use boundary_dto::BoundaryDto;
pub use cache_dto::{CacheStatsDto, ClearCacheResponseDto};
