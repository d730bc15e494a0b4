use rand::{seq::SliceRandom, Rng};
use salesman_challenge::{route_length, ORIGIN};

use super::{crossover, mutate, Population, Route};

pub fn initialize_population<R: Rng + ?Sized>(
    population_size: usize,
    num_points: usize,
    rng: &mut R,
) -> Population {
    (0..population_size)
        .map(|_| {
            let mut interior: Vec<usize> = (1..num_points).collect();
            interior.shuffle(rng);
            let mut route = Vec::with_capacity(num_points + 1);
            route.push(ORIGIN);
            route.extend(interior);
            route.push(ORIGIN);
            route
        })
        .collect()
}

/// Inverse route length. A zero-length route is unbeatable and gets infinite
/// fitness instead of a division by zero.
pub fn fitness(length: f64) -> f64 {
    if length > 0.0 {
        1.0 / length
    } else {
        f64::INFINITY
    }
}

/// Roulette-wheel selection: each route is picked with probability
/// proportional to its fitness. Routes with infinite fitness win outright.
pub fn select_parent<'a, R: Rng + ?Sized>(
    population: &'a [Route],
    fitnesses: &[f64],
    rng: &mut R,
) -> Option<&'a Route> {
    if population.is_empty() {
        return None;
    }
    if let Some(i) = fitnesses.iter().position(|f| f.is_infinite()) {
        return population.get(i);
    }

    let weights = || {
        population
            .iter()
            .zip(fitnesses)
            .filter(|&(_, &f)| f > 0.0)
    };
    let total_fitness: f64 = weights().map(|(_, &f)| f).sum();
    if total_fitness <= 0.0 || !total_fitness.is_finite() {
        return population.choose(rng);
    }

    let pick = rng.gen_range(0.0..total_fitness);
    let mut current = 0.0;
    let mut last = None;
    for (route, &f) in weights() {
        current += f;
        if current > pick {
            return Some(route);
        }
        last = Some(route);
    }
    // rounding can leave the running sum a hair short of the draw
    last
}

/// Number of routes carried over unchanged into the next generation.
pub fn elite_count(population_size: usize) -> usize {
    (population_size / 4).max(1).min(population_size)
}

/// Builds the next generation: the shortest `elite_count` routes survive as
/// they are, the rest of the slots are filled with mutated crossover children
/// of roulette-selected parents.
pub fn next_generation<R: Rng + ?Sized>(
    population: &[Route],
    distance_matrix: &[Vec<f64>],
    mutation_rate: f64,
    rng: &mut R,
) -> Population {
    let population_size = population.len();
    let lengths: Vec<f64> = population
        .iter()
        .map(|route| route_length(route, distance_matrix))
        .collect();
    let fitnesses: Vec<f64> = lengths.iter().map(|&l| fitness(l)).collect();

    let mut ranked: Vec<usize> = (0..population_size).collect();
    ranked.sort_by(|&a, &b| lengths[a].total_cmp(&lengths[b]));

    let mut new_population: Population = Vec::with_capacity(population_size);
    new_population.extend(
        ranked
            .iter()
            .take(elite_count(population_size))
            .map(|&i| population[i].clone()),
    );

    while new_population.len() < population_size {
        let (parent_a, parent_b) = match (
            select_parent(population, &fitnesses, rng),
            select_parent(population, &fitnesses, rng),
        ) {
            (Some(a), Some(b)) => (a, b),
            _ => break,
        };
        let mut child = crossover(parent_a, parent_b, rng);
        mutate(&mut child, mutation_rate, rng);
        new_population.push(child);
    }
    new_population
}
