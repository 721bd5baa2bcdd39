mod boundary;

pub use boundary::{BoundaryPayload, CacheKey, Centroid, GeometryType};
