//! 2-opt hill climbing execution loop.
//!
//! # Algorithm
//!
//! 1. **Scanning**: evaluate every flip in the neighbourhood and keep
//!    the most negative delta (or the first negative one).
//! 2. **Applying**: apply it, record the new cost, scan again.
//! 3. **Converged**: no flip improves the tour, or the iteration cap
//!    was reached.
//!
//! The result is a local optimum with respect to the 2-opt
//! neighbourhood, not a global one.

use super::config::{HillClimbConfig, ScanStrategy};
use crate::error::Result;
use crate::problem::Instance;
use crate::tour::{delta_flip_cost, flip_neighborhood, Move, Tour};

/// Deltas above this are not counted as improvements, so rounding noise
/// cannot keep the climb alive.
pub const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Result of a hill climbing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbResult {
    /// The final tour.
    pub tour: Tour,

    /// Cost of the final tour.
    pub cost: f64,

    /// Starting cost followed by the cost after each applied move.
    /// Non-increasing.
    pub cost_history: Vec<f64>,

    /// Number of applied moves.
    pub iterations: usize,

    /// `true` if the run stopped at a 2-opt local optimum, `false` if the
    /// iteration cap stopped it first.
    pub local_optimum: bool,
}

enum ClimbState {
    Scanning,
    Applying { mv: Move, delta: f64 },
    Converged,
}

/// Executes 2-opt hill climbing.
pub struct HillClimbRunner;

impl HillClimbRunner {
    /// Improves `tour` until no 2-opt move shortens it.
    ///
    /// Fails before iterating if `tour` is not a permutation of the
    /// instance's cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::hill::{HillClimbConfig, HillClimbRunner};
    /// use u_tsp::problem::{Instance, Point};
    /// use u_tsp::tour::Tour;
    ///
    /// let instance = Instance::euclidean(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ])
    /// .unwrap();
    /// let crossed = Tour::from_vec(vec![0, 2, 1, 3]);
    /// let result = HillClimbRunner::run(&instance, crossed, &HillClimbConfig::default()).unwrap();
    /// assert!((result.cost - 4.0).abs() < 1e-9);
    /// assert!(result.local_optimum);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(n = instance.n()))]
    pub fn run(
        instance: &Instance,
        mut tour: Tour,
        config: &HillClimbConfig,
    ) -> Result<HillClimbResult> {
        tour.validate(instance.n())?;

        let mut cost = tour.cost(instance);
        let mut cost_history = vec![cost];
        let mut iterations = 0usize;
        let mut local_optimum = false;
        let mut state = ClimbState::Scanning;

        loop {
            state = match state {
                ClimbState::Scanning => {
                    if config.max_iterations.is_some_and(|cap| iterations >= cap) {
                        ClimbState::Converged
                    } else {
                        match scan(instance, &tour, config.strategy) {
                            Some((mv, delta)) => ClimbState::Applying { mv, delta },
                            None => {
                                local_optimum = true;
                                ClimbState::Converged
                            }
                        }
                    }
                }
                ClimbState::Applying { mv, delta } => {
                    mv.apply(&mut tour);
                    cost += delta;
                    cost_history.push(cost);
                    iterations += 1;
                    tracing::trace!(iteration = iterations, ?mv, cost, "applied 2-opt move");
                    ClimbState::Scanning
                }
                ClimbState::Converged => break,
            };
        }

        tracing::debug!(iterations, cost, local_optimum, "hill climbing finished");
        Ok(HillClimbResult {
            tour,
            cost,
            cost_history,
            iterations,
            local_optimum,
        })
    }
}

/// Finds an improving flip, or `None` at a local optimum.
///
/// Ties keep the first move in enumeration order.
fn scan(instance: &Instance, tour: &Tour, strategy: ScanStrategy) -> Option<(Move, f64)> {
    let mut best: Option<(Move, f64)> = None;
    for (i, j) in flip_neighborhood(tour.len()) {
        let delta = delta_flip_cost(instance, tour, i, j);
        if delta >= -IMPROVEMENT_EPSILON {
            continue;
        }
        if best.is_none_or(|(_, d)| delta < d) {
            best = Some((Move::Flip(i, j), delta));
            if strategy == ScanStrategy::FirstImprovement {
                break;
            }
        }
    }
    best
}
