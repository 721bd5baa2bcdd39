use utoipa::{Modify, OpenApi};

use crate::features::analysis::{dtos as analysis_dtos, handlers as analysis_handlers};
use crate::features::boundaries::{
    dtos as boundaries_dtos, handlers as boundaries_handlers, models as boundaries_models,
};
use crate::features::regions::{
    dtos as regions_dtos, handlers as regions_handlers, models as regions_models,
};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Regions
        regions_handlers::list_provinces,
        regions_handlers::list_sub_districts,
        regions_handlers::list_neighborhoods,
        regions_handlers::resolve_region,
        // Boundaries
        boundaries_handlers::get_boundary,
        // Cache
        boundaries_handlers::get_cache_stats,
        boundaries_handlers::clear_cache,
        boundaries_handlers::reset_cache_stats,
        // Analysis
        analysis_handlers::analyze_shape,
        analysis_handlers::analyze_region,
        // Health
        analysis_handlers::readiness_check,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Regions
            regions_models::RegionLevel,
            regions_models::RegionRequest,
            regions_dtos::RegionResponseDto,
            regions_dtos::ResolvedRegionDto,
            ApiResponse<Vec<regions_dtos::RegionResponseDto>>,
            ApiResponse<regions_dtos::ResolvedRegionDto>,
            // Boundaries
            boundaries_models::GeometryType,
            boundaries_models::Centroid,
            boundaries_dtos::BoundaryDto,
            boundaries_dtos::CacheStatsDto,
            boundaries_dtos::ClearCacheResponseDto,
            ApiResponse<boundaries_dtos::BoundaryDto>,
            ApiResponse<boundaries_dtos::CacheStatsDto>,
            ApiResponse<boundaries_dtos::ClearCacheResponseDto>,
            // Analysis
            analysis_dtos::CircleDataDto,
            analysis_dtos::PolygonDataDto,
            analysis_dtos::DrawingObjectDto,
            analysis_dtos::PopulationResultDto,
            ApiResponse<analysis_dtos::PopulationResultDto>,
            analysis_dtos::ReadinessDto,
            ApiResponse<analysis_dtos::ReadinessDto>,
        )
    ),
    tags(
        (name = "regions", description = "Korean administrative regions (시/도, 시/군/구, 행정동)"),
        (name = "boundaries", description = "Region boundaries served from the LRU cache"),
        (name = "cache", description = "Boundary cache statistics and maintenance"),
        (name = "analysis", description = "Population analysis for shapes and regions"),
        (name = "health", description = "Liveness and readiness"),
    ),
    info(
        title = "Region Boundary API",
        version = "0.1.0",
        description = "Region lookup, cached boundaries and population analysis",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
