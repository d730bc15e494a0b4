use rand::{seq::index, Rng};
use salesman_challenge::ORIGIN;

use super::Route;

/// Order-preserving crossover. A slice `[low, high)` of interior positions is
/// copied from `parent_a`; every other interior position is filled left to
/// right with the next point of `parent_b` not already in the child.
///
/// The cursor into `parent_b` only moves forward. Every point it skips is
/// already in the child and stays there, so when the parents are routes over
/// the same points it never runs out before the child is complete.
pub fn crossover<R: Rng + ?Sized>(parent_a: &[usize], parent_b: &[usize], rng: &mut R) -> Route {
    let len = parent_a.len();
    if len < 4 || parent_b.len() != len {
        return parent_a.to_vec();
    }

    let cuts = index::sample(rng, len - 2, 2);
    let (a, b) = (cuts.index(0) + 1, cuts.index(1) + 1);
    let (low, high) = (a.min(b), a.max(b));

    let num_points = len - 1;
    let mut used = vec![false; num_points];
    used[ORIGIN] = true;
    for &node in &parent_a[low..high] {
        if let Some(u) = used.get_mut(node) {
            *u = true;
        }
    }

    let mut child = parent_a.to_vec();
    child[0] = ORIGIN;
    child[len - 1] = ORIGIN;
    let mut donor = parent_b.iter().copied();
    for pos in (1..low).chain(high..len - 1) {
        match donor.find(|&node| node < num_points && !used[node]) {
            Some(node) => {
                used[node] = true;
                child[pos] = node;
            }
            // parents do not cover the same points
            None => return parent_a.to_vec(),
        }
    }
    child
}

/// With probability `mutation_rate` swaps two distinct interior positions.
/// Returns whether a swap happened.
pub fn mutate<R: Rng + ?Sized>(route: &mut [usize], mutation_rate: f64, rng: &mut R) -> bool {
    if rng.gen::<f64>() >= mutation_rate {
        return false;
    }
    let len = route.len();
    if len < 4 {
        return false;
    }
    let positions = index::sample(rng, len - 2, 2);
    route.swap(positions.index(0) + 1, positions.index(1) + 1);
    true
}
