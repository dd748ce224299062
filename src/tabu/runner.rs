//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from the given tour
//! 2. At each iteration:
//!    a. Scan the whole 2-opt neighbourhood
//!    b. Skip moves touching a tabu position (unless aspiration applies)
//!    c. Apply the admissible move with the lowest delta, even if it
//!    worsens the tour
//!    d. Mark both touched positions tabu for `tabu_tenure` iterations
//! 3. Stop after exactly `max_iterations` iterations
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search, Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! Glover, F. (1990). "Tabu Search, Part II", *ORSA Journal on Computing* 2(1), 4-32.

use super::config::TabuConfig;
use crate::error::Result;
use crate::problem::Instance;
use crate::tour::{delta_flip_cost, flip_neighborhood, Move, Tour};

/// Improvements smaller than this do not count as a new best.
const BEST_EPSILON: f64 = 1e-10;

/// Result of a Tabu Search run.
///
/// Tabu search gives no optimality guarantee. `tour`/`cost` are the
/// state after the last iteration; `best_tour`/`best_cost` are the
/// cheapest state visited.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Tour after the last iteration.
    pub tour: Tour,
    /// Cost of `tour`.
    pub cost: f64,
    /// Cheapest tour visited.
    pub best_tour: Tour,
    /// Cost of `best_tour`.
    pub best_cost: f64,
    /// Iteration after which `best_tour` was reached (0 = the start).
    pub best_iteration: usize,
    /// Total iterations executed.
    pub iterations: usize,
    /// Starting cost followed by the current cost after each iteration.
    pub cost_history: Vec<f64>,
    /// Move applied at each iteration; `None` when every move was tabu.
    pub moves: Vec<Option<Move>>,
}

/// Position-indexed tabu memory: the first iteration at which each
/// position may be touched again.
struct TabuRecord {
    free_at: Vec<usize>,
}

impl TabuRecord {
    fn new(n: usize) -> Self {
        Self {
            free_at: vec![0; n],
        }
    }

    fn is_tabu(&self, pos: usize, iteration: usize) -> bool {
        self.free_at[pos] > iteration
    }

    fn forbid(&mut self, pos: usize, iteration: usize, tenure: usize) {
        self.free_at[pos] = iteration + tenure + 1;
    }
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search over the 2-opt neighbourhood from `tour`.
    ///
    /// Fails before iterating if the tenure is not below `n` or the tour
    /// is not a permutation of the instance's cities.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::problem::{Instance, Point};
    /// use u_tsp::tabu::{TabuConfig, TabuRunner};
    /// use u_tsp::tour::Tour;
    ///
    /// let instance = Instance::euclidean(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(2.0, 0.0),
    ///     Point::new(2.0, 2.0),
    ///     Point::new(0.0, 2.0),
    ///     Point::new(1.0, 3.0),
    /// ])
    /// .unwrap();
    /// let config = TabuConfig::default().with_max_iterations(20).with_tabu_tenure(1);
    /// let result = TabuRunner::run(&instance, Tour::from_vec(vec![0, 2, 1, 3, 4]), &config).unwrap();
    /// assert_eq!(result.iterations, 20);
    /// assert!(result.best_cost <= result.cost_history[0]);
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(n = instance.n()))]
    pub fn run(instance: &Instance, mut tour: Tour, config: &TabuConfig) -> Result<TabuResult> {
        let n = instance.n();
        config.validate(n)?;
        tour.validate(n)?;

        let mut cost = tour.cost(instance);
        let mut best_tour = tour.clone();
        let mut best_cost = cost;
        let mut best_iteration = 0;

        let mut record = TabuRecord::new(n);
        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        let mut moves = Vec::with_capacity(config.max_iterations);
        cost_history.push(cost);

        for iteration in 0..config.max_iterations {
            // Find best admissible move
            let mut chosen: Option<(usize, usize, f64)> = None;
            for (i, j) in flip_neighborhood(n) {
                let delta = delta_flip_cost(instance, &tour, i, j);
                let is_tabu = record.is_tabu(i, iteration) || record.is_tabu(j, iteration);
                if is_tabu {
                    // Aspiration: override tabu if this produces a new global best
                    let aspires = config.aspiration && cost + delta < best_cost - BEST_EPSILON;
                    if !aspires {
                        continue;
                    }
                }
                if chosen.is_none_or(|(_, _, d)| delta < d) {
                    chosen = Some((i, j, delta));
                }
            }

            match chosen {
                Some((i, j, delta)) => {
                    let mv = Move::Flip(i, j);
                    mv.apply(&mut tour);
                    cost += delta;
                    record.forbid(i, iteration, config.tabu_tenure);
                    record.forbid(j, iteration, config.tabu_tenure);
                    moves.push(Some(mv));

                    // Update global best
                    if cost < best_cost - BEST_EPSILON {
                        best_tour.clone_from(&tour);
                        best_cost = cost;
                        best_iteration = iteration + 1;
                    }
                }
                None => {
                    tracing::trace!(iteration, "every move is tabu");
                    moves.push(None);
                }
            }

            cost_history.push(cost);
        }

        tracing::debug!(
            iterations = config.max_iterations,
            cost,
            best_cost,
            best_iteration,
            "tabu search finished"
        );

        Ok(TabuResult {
            tour,
            cost,
            best_tour,
            best_cost,
            best_iteration,
            iterations: config.max_iterations,
            cost_history,
            moves,
        })
    }
}
