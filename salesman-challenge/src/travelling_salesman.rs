use std::collections::HashSet;

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use serde_json::{from_value, Map, Value};

use crate::{
    build_distance_matrix, route_length, validate_route, DistanceMatrix, Error, Point, Result,
    ORIGIN,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    pub route: Vec<usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self { route: Vec::new() }
    }
}

impl TryFrom<Map<String, Value>> for Solution {
    type Error = serde_json::Error;

    fn try_from(v: Map<String, Value>) -> std::result::Result<Self, Self::Error> {
        from_value(Value::Object(v))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub seed: Option<u64>,
    pub points: Vec<Point>,
    pub distance_matrix: DistanceMatrix,
}

impl Challenge {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::invalid_input(format!(
                "at least 2 points are required, got {}",
                points.len()
            )));
        }
        if let Some(p) = points.iter().find(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(Error::invalid_input(format!(
                "point '{}' has a non-finite coordinate ({}, {})",
                p.label, p.x, p.y
            )));
        }
        let distance_matrix = build_distance_matrix(&points);
        if distance_matrix.iter().flatten().any(|d| !d.is_finite()) {
            return Err(Error::invalid_input(
                "coordinates are too far apart for a finite distance",
            ));
        }
        Ok(Self {
            seed: None,
            points,
            distance_matrix,
        })
    }

    /// Random instance of `size` distinct lattice points in `[0, 1000]²`.
    pub fn generate_instance(seed: u64, size: usize) -> Result<Self> {
        if size < 2 {
            return Err(Error::invalid_input("size must be at least 2"));
        }
        let mut rng = SmallRng::seed_from_u64(seed);

        let mut positions: Vec<(i32, i32)> = Vec::with_capacity(size);
        let mut positions_set: HashSet<(i32, i32)> = HashSet::with_capacity(size);
        while positions.len() < size {
            let pos = (rng.gen_range(0..=1000), rng.gen_range(0..=1000));
            if positions_set.insert(pos) {
                positions.push(pos);
            }
        }

        let points = positions
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Point::new(format!("city {}", i), x as f64, y as f64))
            .collect();
        let mut challenge = Self::new(points)?;
        challenge.seed = Some(seed);
        Ok(challenge)
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn labels(&self, route: &[usize]) -> Result<Vec<String>> {
        route
            .iter()
            .map(|&i| {
                self.points
                    .get(i)
                    .map(|p| p.label.clone())
                    .ok_or_else(|| Error::invalid_route(format!("route contains invalid point {}", i)))
            })
            .collect()
    }

    /// Greedy nearest-neighbour tour from the origin.
    pub fn baseline_route(&self) -> Vec<usize> {
        let num_points = self.num_points();
        let mut visited = vec![false; num_points];
        let mut route = Vec::with_capacity(num_points + 1);
        let mut current = ORIGIN;
        visited[current] = true;
        route.push(current);
        while route.len() < num_points {
            let next = (0..num_points)
                .filter(|&p| !visited[p])
                .min_by(|&a, &b| {
                    self.distance_matrix[current][a].total_cmp(&self.distance_matrix[current][b])
                });
            match next {
                Some(next) => {
                    visited[next] = true;
                    route.push(next);
                    current = next;
                }
                None => break,
            }
        }
        route.push(ORIGIN);
        route
    }

    pub fn calc_total_distance(&self, solution: &Solution) -> Result<f64> {
        validate_route(&solution.route, self.num_points())?;
        Ok(route_length(&solution.route, &self.distance_matrix))
    }

    pub fn verify_solution(&self, solution: &Solution) -> Result<f64> {
        self.calc_total_distance(solution)
    }
}
