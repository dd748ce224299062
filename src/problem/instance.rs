//! The problem instance consumed by every heuristic.

use std::ops::Range;

use super::matrix::DistanceMatrix;
use super::point::{Metric, Point};
use crate::error::Result;
use crate::tour::Tour;

/// Largest instance [`Instance::brute_force_optimum`] will enumerate.
pub const BRUTE_FORCE_MAX_CITIES: usize = 10;

/// A TSP instance: `n ≥ 3` cities and their pairwise distances.
///
/// Immutable once built. Algorithms borrow it for their whole run.
#[derive(Debug, Clone)]
pub struct Instance {
    points: Option<Vec<Point>>,
    matrix: DistanceMatrix,
}

impl Instance {
    /// Builds a Euclidean instance from city coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::problem::{Instance, Point};
    ///
    /// let instance = Instance::euclidean(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(3.0, 0.0),
    ///     Point::new(3.0, 4.0),
    /// ])
    /// .unwrap();
    /// assert_eq!(instance.n(), 3);
    /// assert!((instance.dist(0, 2) - 5.0).abs() < 1e-12);
    /// ```
    pub fn euclidean(points: Vec<Point>) -> Result<Self> {
        Self::from_points(points, Metric::Euclidean)
    }

    /// Builds an instance from city coordinates under `metric`.
    pub fn from_points(points: Vec<Point>, metric: Metric) -> Result<Self> {
        let matrix = DistanceMatrix::from_fn(points.len(), |i, j| {
            metric.distance(points[i], points[j])
        })?;
        Ok(Self {
            points: Some(points),
            matrix,
        })
    }

    /// Builds an instance from a precomputed distance matrix.
    pub fn from_matrix(rows: Vec<Vec<f64>>) -> Result<Self> {
        Ok(Self {
            points: None,
            matrix: DistanceMatrix::from_rows(rows)?,
        })
    }

    /// Builds an instance of `n` cities from a symmetric distance function.
    ///
    /// `f` is evaluated in both directions for every pair; an asymmetric
    /// `f` fails with [`TspError::Asymmetric`](crate::error::TspError::Asymmetric).
    pub fn from_fn<F>(n: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> f64,
    {
        Ok(Self {
            points: None,
            matrix: DistanceMatrix::from_fn(n, f)?,
        })
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.matrix.n()
    }

    /// City identifiers, `0..n`.
    pub fn cities(&self) -> Range<usize> {
        0..self.n()
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn dist(&self, i: usize, j: usize) -> f64 {
        self.matrix.get(i, j)
    }

    /// City coordinates, when the instance was built from points.
    pub fn points(&self) -> Option<&[Point]> {
        self.points.as_deref()
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Exact optimum by enumerating every tour that starts at city 0.
    ///
    /// Returns `None` above [`BRUTE_FORCE_MAX_CITIES`] cities.
    pub fn brute_force_optimum(&self) -> Option<(Tour, f64)> {
        let n = self.n();
        if n > BRUTE_FORCE_MAX_CITIES {
            return None;
        }
        let mut order: Vec<usize> = self.cities().collect();
        let mut best = order.clone();
        let mut best_cost = f64::INFINITY;
        permute_tail(&mut order, 1, &mut |perm| {
            let cost = cycle_cost(self, perm);
            if cost < best_cost {
                best_cost = cost;
                best.copy_from_slice(perm);
            }
        });
        Some((Tour::from_vec(best), best_cost))
    }
}

fn cycle_cost(instance: &Instance, cities: &[usize]) -> f64 {
    let n = cities.len();
    (0..n)
        .map(|k| instance.dist(cities[k], cities[(k + 1) % n]))
        .sum()
}

/// Visits every permutation of `items[start..]` by recursive swapping.
fn permute_tail<F: FnMut(&[usize])>(items: &mut [usize], start: usize, visit: &mut F) {
    if start + 1 >= items.len() {
        visit(items);
        return;
    }
    for k in start..items.len() {
        items.swap(start, k);
        permute_tail(items, start + 1, visit);
        items.swap(start, k);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;

    fn square() -> Instance {
        Instance::euclidean(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_euclidean_instance() {
        let instance = square();
        assert_eq!(instance.n(), 4);
        assert_eq!(instance.cities(), 0..4);
        assert!((instance.dist(0, 2) - 2f64.sqrt()).abs() < 1e-12);
        assert_eq!(instance.dist(3, 3), 0.0);
        assert_eq!(instance.points().map(|p| p.len()), Some(4));
    }

    #[test]
    fn test_manhattan_instance() {
        let instance = Instance::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ],
            Metric::Manhattan,
        )
        .unwrap();
        assert_eq!(instance.dist(0, 2), 2.0);
    }

    #[test]
    fn test_too_few_cities() {
        let err = Instance::euclidean(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)]).unwrap_err();
        assert_eq!(err, TspError::TooFewCities(2));
    }

    #[test]
    fn test_matrix_instance_has_no_points() {
        let instance = Instance::from_matrix(vec![
            vec![0.0, 1.0, 1.0],
            vec![1.0, 0.0, 1.0],
            vec![1.0, 1.0, 0.0],
        ])
        .unwrap();
        assert!(instance.points().is_none());
        assert_eq!(instance.matrix().n(), 3);
    }

    #[test]
    fn test_brute_force_square() {
        let (tour, cost) = square().brute_force_optimum().unwrap();
        assert!((cost - 4.0).abs() < 1e-12, "expected perimeter 4, got {cost}");
        assert_eq!(tour.as_slice()[0], 0);
        assert!(tour.is_valid(4));
    }

    #[test]
    fn test_brute_force_refuses_large() {
        let instance = Instance::from_fn(BRUTE_FORCE_MAX_CITIES + 1, |_, _| 1.0).unwrap();
        assert!(instance.brute_force_optimum().is_none());
    }
}
