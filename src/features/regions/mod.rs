//! Administrative region catalog and name resolution.
//!
//! The catalog is a three-level hierarchy loaded once at startup:
//!
//! - Level 1: Provinces (시/도)
//! - Level 2: Sub-districts (시/군/구)
//! - Level 3: Neighborhoods (행정동)
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/provinces/{code}/sub-districts` | List sub-districts in a province |
//! | GET | `/api/regions/sub-districts/{code}/neighborhoods` | List neighborhoods in a sub-district |
//! | POST | `/api/regions/resolve` | Resolve region names to a code |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionResolver;
