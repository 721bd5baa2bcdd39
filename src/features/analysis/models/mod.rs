mod population;

pub use population::PopulationResult;
