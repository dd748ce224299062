//! Random insertion construction.

use rand::seq::SliceRandom;
use rand::Rng;

use super::runner::Construction;
use crate::problem::Instance;
use crate::tour::Tour;

/// Builds a tour by inserting cities in random order, each at the
/// position with the smallest marginal cost
/// `d(prev, city) + d(city, next) - d(prev, next)`.
///
/// The running cost is updated by the chosen marginal cost only, so the
/// whole construction is `O(n²)`.
pub fn random_insertion<R: Rng>(instance: &Instance, rng: &mut R) -> Construction {
    let n = instance.n();
    let mut pending: Vec<usize> = instance.cities().collect();
    pending.shuffle(rng);

    let mut order = Vec::with_capacity(n);
    let mut cost = 0.0;
    if let Some(first) = pending.pop() {
        order.push(first);
    }

    while let Some(city) = pending.pop() {
        let len = order.len();
        let mut best_edge = 0;
        let mut best_delta = f64::INFINITY;
        for k in 0..len {
            let prev = order[k];
            let next = order[(k + 1) % len];
            let delta =
                instance.dist(prev, city) + instance.dist(city, next) - instance.dist(prev, next);
            if delta < best_delta {
                best_delta = delta;
                best_edge = k;
            }
        }
        order.insert(best_edge + 1, city);
        cost += best_delta;
    }

    tracing::debug!(n, cost, "random insertion construction");
    Construction {
        tour: Tour::from_vec(order),
        cost,
    }
}
