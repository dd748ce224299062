//! Nearest-neighbor construction.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::runner::Construction;
use crate::error::{Result, TspError};
use crate::problem::Instance;
use crate::tour::Tour;

/// Builds a tour by always moving to the closest unvisited city.
///
/// Ties go to the lowest city identifier. `O(n²)`.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::nearest_neighbor;
/// use u_tsp::problem::{Instance, Point};
///
/// let instance = Instance::euclidean(vec![
///     Point::new(0.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(1.0, 0.0),
///     Point::new(2.0, 0.0),
/// ])
/// .unwrap();
/// let built = nearest_neighbor(&instance, 0).unwrap();
/// assert_eq!(built.tour.as_slice(), &[0, 2, 3, 1]);
/// assert!((built.cost - 10.0).abs() < 1e-12);
/// ```
pub fn nearest_neighbor(instance: &Instance, start: usize) -> Result<Construction> {
    let n = instance.n();
    if start >= n {
        return Err(TspError::CityOutOfRange { city: start, n });
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut cost = 0.0;
    let mut current = start;
    visited[current] = true;
    order.push(current);

    for _ in 1..n {
        let mut nearest = None;
        let mut nearest_dist = f64::INFINITY;
        for city in instance.cities() {
            if visited[city] {
                continue;
            }
            let d = instance.dist(current, city);
            if nearest.is_none() || d < nearest_dist {
                nearest = Some(city);
                nearest_dist = d;
            }
        }
        // n - 1 rounds over n cities: an unvisited city always remains
        let Some(next) = nearest else { break };
        visited[next] = true;
        order.push(next);
        cost += nearest_dist;
        current = next;
    }
    cost += instance.dist(current, start);

    Ok(Construction {
        tour: Tour::from_vec(order),
        cost,
    })
}

/// Runs [`nearest_neighbor`] from several start cities and keeps the
/// cheapest tour.
///
/// With `sample_size = None` (or `≥ n`) every city is tried and the
/// result is deterministic. Otherwise `k` distinct start cities are
/// drawn from `rng`. Equal costs keep the earliest start in sample
/// order.
pub fn nearest_neighbor_best_of<R: Rng>(
    instance: &Instance,
    sample_size: Option<usize>,
    rng: &mut R,
) -> Result<Construction> {
    let n = instance.n();
    let starts: Vec<usize> = match sample_size {
        Some(0) => {
            return Err(TspError::invalid_config("sample_size must be at least 1"));
        }
        Some(k) if k < n => rand::seq::index::sample(rng, n, k).into_vec(),
        _ => instance.cities().collect(),
    };

    #[cfg(feature = "parallel")]
    let runs: Vec<Construction> = starts
        .par_iter()
        .map(|&start| nearest_neighbor(instance, start))
        .collect::<Result<_>>()?;
    #[cfg(not(feature = "parallel"))]
    let runs: Vec<Construction> = starts
        .iter()
        .map(|&start| nearest_neighbor(instance, start))
        .collect::<Result<_>>()?;

    let mut best: Option<Construction> = None;
    for run in runs {
        if best.as_ref().is_none_or(|b| run.cost < b.cost) {
            best = Some(run);
        }
    }
    tracing::debug!(
        starts = starts.len(),
        cost = best.as_ref().map(|b| b.cost),
        "best-of-k nearest neighbor"
    );
    best.ok_or_else(|| TspError::invalid_config("no start city to try"))
}
