//! Exact enumeration of every tour. Only usable on tiny instances; serves as a
//! correctness oracle for the heuristic solvers.

use crate::{route_length, Challenge, Error, Result, ORIGIN};

pub const MAX_EXHAUSTIVE_POINTS: usize = 11;

/// The `top` shortest tours of `challenge`, sorted by ascending length.
pub fn ranked_tours(challenge: &Challenge, top: usize) -> Result<Vec<(Vec<usize>, f64)>> {
    let num_points = challenge.num_points();
    if num_points > MAX_EXHAUSTIVE_POINTS {
        return Err(Error::invalid_input(format!(
            "exhaustive search supports at most {} points, got {}",
            MAX_EXHAUSTIVE_POINTS, num_points
        )));
    }

    let mut route: Vec<usize> = Vec::with_capacity(num_points + 1);
    route.push(ORIGIN);
    route.extend(1..num_points);
    route.push(ORIGIN);

    let mut ranked: Vec<(Vec<usize>, f64)> = Vec::new();
    permute(&mut route, 1, num_points, &mut |candidate: &[usize]| {
        if top == 0 {
            return;
        }
        let length = route_length(candidate, &challenge.distance_matrix);
        if ranked.len() == top && length >= ranked[top - 1].1 {
            return;
        }
        let pos = ranked.partition_point(|(_, l)| *l <= length);
        ranked.insert(pos, (candidate.to_vec(), length));
        ranked.truncate(top);
    });
    Ok(ranked)
}

/// Shortest tour of `challenge`.
pub fn optimal_tour(challenge: &Challenge) -> Result<(Vec<usize>, f64)> {
    ranked_tours(challenge, 1)?
        .pop()
        .ok_or_else(|| Error::invalid_input("no tours to rank"))
}

// Swap-based recursion over route[k..end]; the anchored endpoints never move.
fn permute(route: &mut [usize], k: usize, end: usize, visit: &mut dyn FnMut(&[usize])) {
    if k + 1 >= end {
        visit(route);
        return;
    }
    for i in k..end {
        route.swap(k, i);
        permute(route, k + 1, end, visit);
        route.swap(k, i);
    }
}
