pub mod analysis;
pub mod boundaries;
pub mod regions;
