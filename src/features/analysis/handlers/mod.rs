mod analysis_handler;
mod readiness_handler;

pub use analysis_handler::*;
pub use readiness_handler::*;
