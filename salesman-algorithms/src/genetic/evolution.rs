use log::{log_enabled, trace, Level};
use rand::Rng;
use salesman_challenge::route_length;

use super::{initialize_population, next_generation, Route};
use crate::{Error, Hyperparameters, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneticOptimizer {
    pub generations: usize,
    pub population_size: usize,
    pub mutation_rate: f64,
}

impl GeneticOptimizer {
    pub fn new(generations: usize, population_size: usize, mutation_rate: f64) -> Result<Self> {
        if generations == 0 {
            return Err(Error::configuration("generations must be at least 1"));
        }
        if population_size == 0 {
            return Err(Error::configuration("population_size must be at least 1"));
        }
        if !(0.0..=1.0).contains(&mutation_rate) {
            return Err(Error::configuration(format!(
                "mutation_rate must be within [0, 1], got {}",
                mutation_rate
            )));
        }
        Ok(Self {
            generations,
            population_size,
            mutation_rate,
        })
    }

    pub fn from_hyperparameters(params: &Hyperparameters) -> Result<Self> {
        Self::new(
            params.generations,
            params.population_size,
            params.mutation_rate,
        )
    }

    /// Evolves a fresh random population for exactly `generations` rounds and
    /// returns the shortest route of the final generation.
    pub fn run<R: Rng + ?Sized>(&self, distance_matrix: &[Vec<f64>], rng: &mut R) -> Route {
        let num_points = distance_matrix.len();
        let mut population = initialize_population(self.population_size, num_points, rng);

        for generation in 0..self.generations {
            population = next_generation(&population, distance_matrix, self.mutation_rate, rng);
            if log_enabled!(Level::Trace) {
                let best = population
                    .iter()
                    .map(|route| route_length(route, distance_matrix))
                    .fold(f64::INFINITY, f64::min);
                trace!("generation {}: best length {:.3}", generation, best);
            }
        }

        population
            .into_iter()
            .map(|route| {
                let length = route_length(&route, distance_matrix);
                (route, length)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(route, _)| route)
            .unwrap_or_default()
    }
}
