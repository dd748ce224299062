//! Tour representation.

use std::ops::Index;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Result, TspError};
use crate::problem::Instance;

/// A cyclic visiting order: a permutation of the city identifiers `0..n`.
///
/// The edge from the last position back to the first is part of the
/// tour. A `Tour` is owned by one algorithm at a time; runners take it
/// by value and hand it back in their result.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// The tour `0, 1, …, n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (0..n).collect(),
        }
    }

    /// A uniformly random tour of `n` cities.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let mut cities: Vec<usize> = (0..n).collect();
        cities.shuffle(rng);
        Self { cities }
    }

    /// Wraps a visiting order without checking it.
    ///
    /// Use [`Tour::new`] or [`Tour::validate`] before handing an
    /// unchecked tour to a cost or move routine.
    pub fn from_vec(cities: Vec<usize>) -> Self {
        Self { cities }
    }

    /// Wraps a visiting order after checking it is a permutation of the
    /// instance's cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::problem::Instance;
    /// use u_tsp::tour::Tour;
    ///
    /// let instance = Instance::from_fn(4, |_, _| 1.0).unwrap();
    /// assert!(Tour::new(vec![3, 0, 1, 2], &instance).is_ok());
    /// assert!(Tour::new(vec![2, 0, 1, 2], &instance).is_err());
    /// ```
    pub fn new(cities: Vec<usize>, instance: &Instance) -> Result<Self> {
        let tour = Self { cities };
        tour.validate(instance.n())?;
        Ok(tour)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.cities
    }

    /// Position of `city` in the visiting order, if present.
    pub fn position_of(&self, city: usize) -> Option<usize> {
        self.cities.iter().position(|&c| c == city)
    }

    /// `true` iff the tour has length `n` and visits each of `0..n`
    /// exactly once.
    pub fn is_valid(&self, n: usize) -> bool {
        self.validate(n).is_ok()
    }

    /// Like [`Tour::is_valid`], naming the first defect found.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.cities.len() != n {
            return Err(TspError::invalid_tour(format!(
                "expected {n} cities, got {}",
                self.cities.len()
            )));
        }
        let mut seen = vec![false; n];
        for (pos, &city) in self.cities.iter().enumerate() {
            if city >= n {
                return Err(TspError::invalid_tour(format!(
                    "city {city} at position {pos} is not in 0..{n}"
                )));
            }
            if seen[city] {
                return Err(TspError::invalid_tour(format!(
                    "city {city} appears twice (again at position {pos})"
                )));
            }
            seen[city] = true;
        }
        Ok(())
    }

    /// Total length of the closed tour. `O(n)`.
    ///
    /// The tour must be valid for `instance`.
    pub fn cost(&self, instance: &Instance) -> f64 {
        let n = self.cities.len();
        (0..n)
            .map(|k| instance.dist(self.cities[k], self.cities[(k + 1) % n]))
            .sum()
    }

    pub(crate) fn swap_positions(&mut self, p: usize, q: usize) {
        self.cities.swap(p, q);
    }

    pub(crate) fn reverse_segment(&mut self, i: usize, j: usize) {
        self.cities[i..=j].reverse();
    }
}

impl Index<usize> for Tour {
    type Output = usize;

    #[inline]
    fn index(&self, pos: usize) -> &usize {
        &self.cities[pos]
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}
