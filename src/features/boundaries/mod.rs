//! Region boundaries served through a bounded LRU cache.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/boundaries` | Boundary of a region by name |
//! | GET | `/api/cache/stats` | Cache statistics |
//! | DELETE | `/api/cache` | Clear the cache |
//! | DELETE | `/api/cache/stats` | Reset cache counters |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BoundaryLookupService;
