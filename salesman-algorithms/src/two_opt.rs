use salesman_challenge::route_length;

use crate::genetic::Route;

/// 2-opt hill climb. For every pair `i < j` of interior positions that are not
/// adjacent, the candidate reverses `route[i..j]` of the current best route and
/// is adopted when strictly shorter. Passes repeat until one finds nothing,
/// leaving a local optimum. Endpoints are never moved.
pub fn refine(route: &[usize], distance_matrix: &[Vec<f64>]) -> Route {
    let mut best = route.to_vec();
    let mut best_length = route_length(&best, distance_matrix);
    let len = best.len();

    let mut improved = true;
    while improved {
        improved = false;
        for i in 1..len.saturating_sub(1) {
            for j in (i + 2)..(len - 1) {
                let mut candidate = best.clone();
                candidate[i..j].reverse();
                let candidate_length = route_length(&candidate, distance_matrix);
                if candidate_length < best_length {
                    best = candidate;
                    best_length = candidate_length;
                    improved = true;
                }
            }
        }
    }
    best
}
