//! Traveling Salesman tour optimization toolkit.
//!
//! Provides the building blocks of classical TSP heuristics:
//!
//! - **Problem**: city coordinates or a precomputed symmetric distance
//!   matrix, validated once at construction.
//! - **Tour**: a cyclic permutation of city identifiers with `O(1)` cost
//!   deltas for swap and 2-opt flip moves.
//! - **Construction**: nearest neighbor (single start or best-of-k),
//!   greedy edge with union-find cycle detection, random insertion.
//! - **Hill climbing**: best- or first-improvement 2-opt descent to a
//!   local optimum.
//! - **Simulated Annealing (SA)**: Metropolis acceptance under a
//!   geometric cooling schedule.
//! - **Tabu Search (TS)**: steepest 2-opt moves with position-based
//!   short-term memory.
//!
//! # Data flow
//!
//! ```text
//! Instance ──► construct ──► Tour ──► hill / sa / tabu ──► Tour + cost history
//! ```
//!
//! Every algorithm owns the tour it works on, and every stochastic
//! algorithm takes its random source explicitly (or a seed), so runs
//! are reproducible. Independent runs share no mutable state; the
//! `parallel` feature uses that to spread best-of-k construction and SA
//! restarts over a rayon pool.
//!
//! # Example
//!
//! ```
//! use u_tsp::construct::{ConstructionConfig, ConstructionRunner};
//! use u_tsp::hill::{HillClimbConfig, HillClimbRunner};
//! use u_tsp::problem::{Instance, Point};
//!
//! let instance = Instance::euclidean(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(4.0, 0.0),
//!     Point::new(4.0, 3.0),
//!     Point::new(1.0, 5.0),
//!     Point::new(-2.0, 2.0),
//! ])
//! .unwrap();
//!
//! let start = ConstructionRunner::run(&instance, &ConstructionConfig::default()).unwrap();
//! let improved = HillClimbRunner::run(&instance, start.tour, &HillClimbConfig::default()).unwrap();
//! assert!(improved.cost <= start.cost + 1e-9);
//! ```

pub mod construct;
pub mod error;
pub mod hill;
pub mod problem;
pub mod random;
pub mod sa;
pub mod tabu;
pub mod tour;

pub use error::{Result, TspError};
