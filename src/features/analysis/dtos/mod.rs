mod analysis_dto;
mod readiness_dto;

pub use analysis_dto::{CircleDataDto, DrawingObjectDto, PolygonDataDto, PopulationResultDto};
pub use readiness_dto::ReadinessDto;
