//! Population analysis over drawn shapes and administrative regions.
//!
//! The spatial computation itself runs remotely; this feature validates
//! input, relays it and maps the results.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/analysis/shape` | Population inside a circle or polygon |
//! | POST | `/api/analysis/region` | Census population of a region |
//! | GET | `/health/ready` | Readiness, probing the analysis backend |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AnalysisService;
