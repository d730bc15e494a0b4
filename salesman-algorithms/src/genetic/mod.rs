//! Genetic search over origin-anchored routes: random initial tours,
//! roulette-wheel selection, order-preserving crossover, swap mutation and
//! elitist generational replacement.

mod evolution;
pub use evolution::*;
mod operators;
pub use operators::*;
mod population;
pub use population::*;

/// Sequence of point indices; `route[0]` and `route[len - 1]` are the origin.
pub type Route = Vec<usize>;
pub type Population = Vec<Route>;
