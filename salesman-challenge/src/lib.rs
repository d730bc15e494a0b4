mod error;
pub use error::*;
mod geometry;
pub use geometry::*;
mod route;
pub use route::*;
mod travelling_salesman;
pub use travelling_salesman::*;
pub mod exhaustive;

/// Index of the fixed start and end point of every tour.
pub const ORIGIN: usize = 0;
