mod boundary_handler;
mod cache_handler;

pub use boundary_handler::*;
pub use cache_handler::*;
