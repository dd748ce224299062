//! Simulated Annealing (SA).
//!
//! A single-tour trajectory metaheuristic inspired by the physical
//! annealing process. Proposes random swap (or flip) moves and accepts
//! worsening ones with probability `exp(-Δ/T)`, where the temperature
//! `T` cools geometrically after every epoch. This lets the search
//! escape 2-opt local optima, but offers no guarantee of reaching the
//! global optimum.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{SaResult, SaRunner};
