//! Construction heuristics.
//!
//! Each heuristic turns an [`Instance`](crate::problem::Instance) into a
//! feasible starting [`Tour`](crate::tour::Tour) and its cost:
//!
//! - [`nearest_neighbor`] / [`nearest_neighbor_best_of`]: greedy walk to
//!   the closest unvisited city, optionally from several starts.
//! - [`greedy_edge`]: shortest-edge-first matching, with a
//!   [`DisjointSet`] rejecting premature cycles.
//! - [`random_insertion`]: cheapest-position insertion in random order.
//!
//! [`ConstructionRunner`] dispatches on a [`ConstructionConfig`].
//!
//! # References
//!
//! - Rosenkrantz, Stearns & Lewis (1977), "An Analysis of Several
//!   Heuristics for the Traveling Salesman Problem"
//! - Johnson & McGeoch (1997), "The Traveling Salesman Problem: A Case
//!   Study in Local Optimization"

mod config;
mod greedy;
mod insertion;
mod nearest;
mod runner;
mod union_find;

pub use config::{ConstructionConfig, ConstructionMethod};
pub use greedy::{greedy_edge, greedy_edges};
pub use insertion::random_insertion;
pub use nearest::{nearest_neighbor, nearest_neighbor_best_of};
pub use runner::{Construction, ConstructionRunner};
pub use union_find::DisjointSet;
