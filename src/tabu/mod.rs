//! Tabu Search (TS).
//!
//! A single-tour trajectory metaheuristic that always moves to the best
//! admissible 2-opt neighbour, worsening or not, and forbids recently
//! touched tour positions for a number of iterations (the tenure) so
//! the search does not immediately undo itself.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;

pub use config::TabuConfig;
pub use runner::{TabuResult, TabuRunner};
