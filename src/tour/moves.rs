//! Incremental move evaluation.
//!
//! Both move kinds are addressed by tour *positions*, not city
//! identifiers. Each `delta_*` function returns the exact change in
//! total cost the matching `apply_*` call would cause, looking only at
//! the handful of edges the move touches:
//!
//! ```text
//! cost(after) == cost(before) + delta
//! ```
//!
//! Neither function re-validates the tour. Passing an invalid tour or
//! out-of-range positions is a caller error.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::types::Tour;
use crate::problem::Instance;

/// A local-search move on two tour positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    /// Exchange the cities at two positions.
    Swap(usize, usize),
    /// Reverse the segment between two positions, inclusive (2-opt).
    Flip(usize, usize),
}

/// Which move kind a stochastic search proposes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveKind {
    #[default]
    Swap,
    Flip,
}

impl MoveKind {
    pub fn at(self, p: usize, q: usize) -> Move {
        match self {
            MoveKind::Swap => Move::Swap(p, q),
            MoveKind::Flip => Move::Flip(p, q),
        }
    }
}

impl Move {
    /// Cost change of applying this move to `tour`.
    #[inline]
    pub fn delta(&self, instance: &Instance, tour: &Tour) -> f64 {
        match *self {
            Move::Swap(p, q) => delta_swap_cost(instance, tour, p, q),
            Move::Flip(p, q) => delta_flip_cost(instance, tour, p, q),
        }
    }

    #[inline]
    pub fn apply(&self, tour: &mut Tour) {
        match *self {
            Move::Swap(p, q) => apply_swap(tour, p, q),
            Move::Flip(p, q) => apply_flip(tour, p, q),
        }
    }

    /// The two positions the move touches.
    pub fn positions(&self) -> (usize, usize) {
        match *self {
            Move::Swap(p, q) | Move::Flip(p, q) => (p, q),
        }
    }
}

/// Cost change of exchanging the cities at positions `p` and `q`. `O(1)`.
///
/// Only the edges incident to `p` and `q` change. When the positions are
/// neighbours (including across the wrap-around), those edge sets
/// overlap and each shared edge is counted once.
#[inline]
pub fn delta_swap_cost(instance: &Instance, tour: &Tour, p: usize, q: usize) -> f64 {
    debug_assert_ne!(p, q, "swap positions must differ");
    let cities = tour.as_slice();
    let n = cities.len();
    let after = |k: usize| {
        if k == p {
            cities[q]
        } else if k == q {
            cities[p]
        } else {
            cities[k]
        }
    };

    // Edge `k` joins positions `k` and `k + 1 (mod n)`.
    let mut edges = [0usize; 4];
    let mut count = 0;
    for k in [(p + n - 1) % n, p, (q + n - 1) % n, q] {
        if !edges[..count].contains(&k) {
            edges[count] = k;
            count += 1;
        }
    }

    edges[..count]
        .iter()
        .map(|&k| {
            let next = (k + 1) % n;
            instance.dist(after(k), after(next)) - instance.dist(cities[k], cities[next])
        })
        .sum()
}

/// Exchanges the cities at positions `p` and `q`. Self-inverse.
#[inline]
pub fn apply_swap(tour: &mut Tour, p: usize, q: usize) {
    tour.swap_positions(p, q);
}

/// Cost change of reversing positions `min(p, q)..=max(p, q)`. `O(1)`.
///
/// Removes the edges entering and leaving the segment and adds the two
/// edges joining its reversed ends to the same neighbours.
#[inline]
pub fn delta_flip_cost(instance: &Instance, tour: &Tour, p: usize, q: usize) -> f64 {
    debug_assert_ne!(p, q, "flip bounds must differ");
    let (i, j) = if p < q { (p, q) } else { (q, p) };
    let cities = tour.as_slice();
    let n = cities.len();
    // reversing the whole tour only changes its direction
    if i == 0 && j == n - 1 {
        return 0.0;
    }
    let prev = cities[(i + n - 1) % n];
    let next = cities[(j + 1) % n];
    let (first, last) = (cities[i], cities[j]);
    instance.dist(prev, last) + instance.dist(first, next)
        - instance.dist(prev, first)
        - instance.dist(last, next)
}

/// Reverses positions `min(p, q)..=max(p, q)` in place. Self-inverse.
#[inline]
pub fn apply_flip(tour: &mut Tour, p: usize, q: usize) {
    let (i, j) = if p < q { (p, q) } else { (q, p) };
    tour.reverse_segment(i, j);
}

/// Enumerates the 2-opt neighbourhood shared by all local searches.
///
/// Yields `(i, j)` with `1 ≤ i ≤ n-2` and `i < j ≤ n-1`, in row-major
/// order. Position 0 never moves, which pins the tour's rotation. The
/// enumeration order is the tie-break order of every scan.
pub fn flip_neighborhood(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..n.saturating_sub(1)).flat_map(move |i| ((i + 1)..n).map(move |j| (i, j)))
}

/// Number of moves [`flip_neighborhood`] yields.
pub fn flip_neighborhood_size(n: usize) -> usize {
    if n < 3 {
        0
    } else {
        (n - 2) * (n - 1) / 2
    }
}
