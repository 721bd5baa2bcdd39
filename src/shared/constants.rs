// =============================================================================
// BOUNDARY CACHE
// =============================================================================

/// Default maximum number of cached boundaries
pub const DEFAULT_CACHE_MAX_ITEMS: usize = 100;

/// Default soft memory ceiling for the boundary cache (in megabytes)
pub const DEFAULT_CACHE_MAX_MEMORY_MB: usize = 50;

/// Default share of entries dropped per pass when the memory ceiling is exceeded
pub const DEFAULT_CACHE_EVICTION_PERCENT: usize = 10;

pub const BYTES_PER_MB: usize = 1024 * 1024;

// =============================================================================
// REMOTE ANALYTICS (SUPABASE RPC / TABLES)
// =============================================================================

/// RPC returning the WGS84 GeoJSON outline and centroid of a region
pub const RPC_REGION_BOUNDARY: &str = "get_region_boundary_wgs84";

/// RPC computing population figures for a drawn circle or polygon
pub const RPC_ANALYZE_SERVICE_AREA: &str = "analyze_hospital_service_area";

/// RPC used as a cheap connectivity check (transforms one fixed point)
pub const RPC_CONNECTION_CHECK: &str = "test_coordinate_conversion";

/// (lng, lat) sent to the connectivity check: Seoul City Hall
pub const CONNECTION_CHECK_POINT: (f64, f64) = (126.9780, 37.5665);

/// Table holding census figures per region code
pub const TABLE_CENSUS_REGION: &str = "census_region";

// =============================================================================
// SHAPE ANALYSIS LIMITS
// =============================================================================

/// Maximum radius for circle analysis (50km)
pub const MAX_CIRCLE_RADIUS_METERS: f64 = 50_000.0;

/// Default number of segments used to approximate a circle
pub const DEFAULT_CIRCLE_SEGMENTS: u32 = 32;

/// Bounds on the segment count; fewer than 4 no longer approximates a circle
pub const MIN_CIRCLE_SEGMENTS: u32 = 4;
pub const MAX_CIRCLE_SEGMENTS: u32 = 360;
