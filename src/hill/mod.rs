//! Hill climbing (2-opt local search).
//!
//! Repeatedly applies the best (or first) improving flip move until the
//! tour is 2-opt optimal. Deterministic for a given starting tour.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

mod config;
mod runner;

pub use config::{HillClimbConfig, ScanStrategy};
pub use runner::{HillClimbResult, HillClimbRunner, IMPROVEMENT_EPSILON};
