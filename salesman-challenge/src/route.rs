use crate::{Error, Result, ORIGIN};

/// Length of `route` treated as a closed cycle: every consecutive edge plus the
/// edge from the last element back to the first. For an origin-anchored route
/// the closing edge is origin to origin and contributes nothing.
pub fn route_length(route: &[usize], distance_matrix: &[Vec<f64>]) -> f64 {
    match (route.first(), route.last()) {
        (Some(&first), Some(&last)) => {
            route
                .windows(2)
                .map(|w| distance_matrix[w[0]][w[1]])
                .sum::<f64>()
                + distance_matrix[last][first]
        }
        _ => 0.0,
    }
}

/// Checks that `route` visits `num_points` points as an origin-anchored tour:
/// `num_points + 1` entries, the origin first and last, and every other point
/// exactly once in between.
pub fn validate_route(route: &[usize], num_points: usize) -> Result<()> {
    if num_points < 2 {
        return Err(Error::invalid_input(format!(
            "at least 2 points are required, got {}",
            num_points
        )));
    }
    if route.len() != num_points + 1 {
        return Err(Error::invalid_route(format!(
            "route length ({}) does not match number of points + 1 ({})",
            route.len(),
            num_points + 1
        )));
    }
    if route[0] != ORIGIN || route[num_points] != ORIGIN {
        return Err(Error::invalid_route(
            "route must start and end at the origin",
        ));
    }
    let mut seen = vec![false; num_points];
    seen[ORIGIN] = true;
    for &node in &route[1..num_points] {
        if node >= num_points {
            return Err(Error::invalid_route(format!(
                "route contains invalid point {}",
                node
            )));
        }
        if seen[node] {
            return Err(Error::invalid_route(format!(
                "route visits point {} more than once",
                node
            )));
        }
        seen[node] = true;
    }
    Ok(())
}
