mod analysis_service;
mod population_analyzer;

pub use analysis_service::{AnalysisError, AnalysisService, DrawingShape};
pub use population_analyzer::{PopulationAnalyzer, SupabasePopulationAnalyzer};
