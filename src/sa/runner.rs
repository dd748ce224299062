//! SA execution loop.

use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::SaConfig;
use crate::error::{Result, TspError};
use crate::problem::Instance;
use crate::random::{create_rng, derive_seed, rng_from_seed};
use crate::tour::Tour;

/// Result of a Simulated Annealing run.
///
/// SA gives no optimality guarantee: quality depends on the schedule.
/// `tour`/`cost` are where the chain ended; `best_tour`/`best_cost` are
/// the cheapest state it visited.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Tour at the end of the last epoch.
    pub tour: Tour,

    /// Cost of `tour`.
    pub cost: f64,

    /// The cheapest tour visited.
    pub best_tour: Tour,

    /// Cost of `best_tour`.
    pub best_cost: f64,

    /// Starting cost followed by the current cost at the end of each epoch.
    pub cost_history: Vec<f64>,

    /// Number of epochs executed.
    pub epochs: usize,

    /// Total number of proposals evaluated.
    pub iterations: usize,

    /// Temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,
}

/// Executes Simulated Annealing on a tour.
pub struct SaRunner;

impl SaRunner {
    /// Runs SA from `tour`, seeding the generator from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::problem::{Instance, Point};
    /// use u_tsp::sa::{SaConfig, SaRunner};
    /// use u_tsp::tour::Tour;
    ///
    /// let points = (0..12)
    ///     .map(|k| {
    ///         let a = k as f64 * std::f64::consts::TAU / 12.0;
    ///         Point::new(a.cos(), a.sin())
    ///     })
    ///     .collect();
    /// let instance = Instance::euclidean(points).unwrap();
    /// let config = SaConfig::default()
    ///     .with_initial_temperature(1.0)
    ///     .with_min_temperature(1e-3)
    ///     .with_seed(42);
    ///
    /// let result = SaRunner::run(&instance, Tour::identity(12), &config).unwrap();
    /// assert_eq!(result.epochs, config.epoch_count());
    /// assert!(result.tour.is_valid(12));
    /// ```
    pub fn run(instance: &Instance, tour: Tour, config: &SaConfig) -> Result<SaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, tour, config, &mut rng)
    }

    /// Runs SA from `tour` with a caller-owned generator.
    ///
    /// Fails before the first epoch if the configuration or the tour is
    /// invalid.
    #[tracing::instrument(level = "debug", skip_all, fields(n = instance.n()))]
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        mut tour: Tour,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult> {
        config.validate()?;
        let n = instance.n();
        tour.validate(n)?;

        let epochs = config.epoch_count();
        let mut cost = tour.cost(instance);
        let mut best_tour = tour.clone();
        let mut best_cost = cost;

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        let mut cost_history = Vec::with_capacity(epochs + 1);
        cost_history.push(cost);

        for epoch in 0..epochs {
            for _ in 0..config.epoch_length {
                // two distinct positions, uniformly
                let p = rng.random_range(0..n);
                let mut q = rng.random_range(0..n - 1);
                if q >= p {
                    q += 1;
                }
                let mv = config.move_kind.at(p, q);
                let delta = mv.delta(instance, &tour);

                // Metropolis acceptance criterion
                let accept = if delta < 0.0 {
                    improving_moves += 1;
                    true
                } else {
                    let probability = (-delta / temperature).exp();
                    rng.random_range(0.0..1.0) < probability
                };

                if accept {
                    mv.apply(&mut tour);
                    cost += delta;
                    accepted_moves += 1;

                    if cost < best_cost {
                        best_tour.clone_from(&tour);
                        best_cost = cost;
                    }
                }

                iterations += 1;
            }

            // Cool down
            temperature *= config.cooling_rate;
            cost_history.push(cost);
            tracing::trace!(epoch, temperature, cost, best_cost, "SA epoch finished");
        }

        tracing::debug!(
            epochs,
            iterations,
            accepted_moves,
            improving_moves,
            cost,
            best_cost,
            "SA finished"
        );

        Ok(SaResult {
            tour,
            cost,
            best_tour,
            best_cost,
            cost_history,
            epochs,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
        })
    }

    /// Runs `restarts` independent SA chains from copies of `tour` and
    /// returns the one that ends cheapest (earliest chain on ties).
    ///
    /// Chain `k` is seeded with `derive_seed(base, k)`, where `base` is
    /// `config.seed` or a fresh random value. With the `parallel`
    /// feature the chains run on the rayon pool.
    pub fn run_restarts(
        instance: &Instance,
        tour: &Tour,
        config: &SaConfig,
        restarts: usize,
    ) -> Result<SaResult> {
        config.validate()?;
        tour.validate(instance.n())?;
        if restarts == 0 {
            return Err(TspError::invalid_config("restarts must be at least 1"));
        }
        let base = config.seed.unwrap_or_else(rand::random);

        let chain = |k: usize| {
            let mut rng = create_rng(derive_seed(base, k as u64));
            Self::run_with_rng(instance, tour.clone(), config, &mut rng)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<SaResult> = (0..restarts)
            .into_par_iter()
            .map(chain)
            .collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let results: Vec<SaResult> = (0..restarts).map(chain).collect::<Result<_>>()?;

        let mut best: Option<SaResult> = None;
        for result in results {
            if best.as_ref().is_none_or(|b| result.cost < b.cost) {
                best = Some(result);
            }
        }
        tracing::debug!(restarts, cost = best.as_ref().map(|b| b.cost), "SA restarts finished");
        best.ok_or_else(|| TspError::invalid_config("restarts must be at least 1"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Point;
    use crate::tour::MoveKind;
    use proptest::prelude::*;

    fn circle(n: usize) -> Instance {
        let points = (0..n)
            .map(|k| {
                let angle = k as f64 * std::f64::consts::TAU / n as f64;
                Point::new(10.0 * angle.cos(), 10.0 * angle.sin())
            })
            .collect();
        Instance::euclidean(points).unwrap()
    }

    fn scrambled(n: usize, seed: u64) -> Tour {
        Tour::random(n, &mut create_rng(seed))
    }

    #[test]
    fn test_schedule_epoch_count() {
        let instance = circle(10);
        for (t_max, t_min, r) in [(100.0, 0.01, 0.9), (5.0, 0.5, 0.5), (1.0, 0.999, 0.99)] {
            let config = SaConfig::default()
                .with_initial_temperature(t_max)
                .with_min_temperature(t_min)
                .with_cooling_rate(r)
                .with_epoch_length(5)
                .with_seed(1);
            let expected = ((f64::ln(t_min) - f64::ln(t_max)) / f64::ln(r)).ceil() as usize;

            let result = SaRunner::run(&instance, Tour::identity(10), &config).unwrap();

            assert_eq!(result.epochs, expected);
            assert_eq!(result.cost_history.len(), expected + 1);
            assert_eq!(result.iterations, expected * 5);
            assert!(result.final_temperature <= t_min);
        }
    }

    #[test]
    fn test_sa_improves_scrambled_circle() {
        let n = 20;
        let instance = circle(n);
        let start = scrambled(n, 7);
        let start_cost = start.cost(&instance);
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_min_temperature(1e-3)
            .with_cooling_rate(0.95)
            .with_epoch_length(400)
            .with_move_kind(MoveKind::Flip)
            .with_seed(42);

        let result = SaRunner::run(&instance, start, &config).unwrap();

        assert!(
            result.best_cost < 0.6 * start_cost,
            "expected a large improvement from {start_cost}, got {}",
            result.best_cost
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_sa_tracked_costs_match_tours() {
        let n = 15;
        let instance = circle(n);
        for kind in [MoveKind::Swap, MoveKind::Flip] {
            let config = SaConfig::default()
                .with_initial_temperature(5.0)
                .with_min_temperature(0.05)
                .with_cooling_rate(0.9)
                .with_epoch_length(50)
                .with_move_kind(kind)
                .with_seed(3);
            let result = SaRunner::run(&instance, scrambled(n, 3), &config).unwrap();

            assert!(result.tour.is_valid(n));
            assert!(result.best_tour.is_valid(n));
            assert!((result.cost - result.tour.cost(&instance)).abs() < 1e-6);
            assert!((result.best_cost - result.best_tour.cost(&instance)).abs() < 1e-6);
            assert!(result.best_cost <= result.cost + 1e-12);
            assert_eq!(*result.cost_history.last().unwrap(), result.cost);
        }
    }

    #[test]
    fn test_sa_metropolis_accepts_uphill() {
        // At very high temperature, almost all moves should be accepted
        let instance = circle(12);
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_min_temperature(1e7)
            .with_cooling_rate(0.5)
            .with_epoch_length(1000)
            .with_seed(42);

        let result = SaRunner::run(&instance, Tour::identity(12), &config).unwrap();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.99,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
    }

    #[test]
    fn test_sa_reproducible_with_seed() {
        let instance = circle(14);
        let config = SaConfig::default()
            .with_initial_temperature(2.0)
            .with_min_temperature(0.1)
            .with_epoch_length(30)
            .with_seed(99);
        let a = SaRunner::run(&instance, scrambled(14, 1), &config).unwrap();
        let b = SaRunner::run(&instance, scrambled(14, 1), &config).unwrap();
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_sa_rejects_bad_input() {
        let instance = circle(6);
        let bad_config = SaConfig::default().with_cooling_rate(1.0);
        assert!(matches!(
            SaRunner::run(&instance, Tour::identity(6), &bad_config),
            Err(TspError::InvalidConfig(_))
        ));

        let bad_tour = Tour::from_vec(vec![0, 1, 2]);
        assert!(matches!(
            SaRunner::run(&instance, bad_tour, &SaConfig::default().with_seed(1)),
            Err(TspError::InvalidTour(_))
        ));
    }

    #[test]
    fn test_sa_three_cities() {
        let instance = circle(3);
        let config = SaConfig::default()
            .with_initial_temperature(1.0)
            .with_min_temperature(0.5)
            .with_seed(5);
        let result = SaRunner::run(&instance, Tour::identity(3), &config).unwrap();
        assert!(result.tour.is_valid(3));
        assert!((result.cost - Tour::identity(3).cost(&instance)).abs() < 1e-9);
    }

    #[test]
    fn test_restarts_pick_cheapest_chain() {
        let n = 16;
        let instance = circle(n);
        let start = scrambled(n, 11);
        let config = SaConfig::default()
            .with_initial_temperature(5.0)
            .with_min_temperature(0.01)
            .with_cooling_rate(0.9)
            .with_epoch_length(100)
            .with_move_kind(MoveKind::Flip)
            .with_seed(2024);

        let best = SaRunner::run_restarts(&instance, &start, &config, 4).unwrap();

        for k in 0..4u64 {
            let mut rng = create_rng(derive_seed(2024, k));
            let single = SaRunner::run_with_rng(&instance, start.clone(), &config, &mut rng).unwrap();
            assert!(best.cost <= single.cost + 1e-12);
        }
        assert!(best.tour.is_valid(n));
    }

    #[test]
    fn test_zero_restarts_rejected() {
        let instance = circle(5);
        let result = SaRunner::run_restarts(&instance, &Tour::identity(5), &SaConfig::default(), 0);
        assert!(matches!(result, Err(TspError::InvalidConfig(_))));
    }

    proptest! {
        #[test]
        fn prop_sa_every_step_is_a_permutation(
            n in 3usize..12,
            seed in any::<u64>(),
            flip in any::<bool>(),
        ) {
            let instance = circle(n);
            let start = scrambled(n, seed);
            let move_kind = if flip { MoveKind::Flip } else { MoveKind::Swap };
            // one proposal per epoch; halving from 50 gives exactly `epochs` epochs
            let config_for = |epochs: i32| {
                SaConfig::default()
                    .with_initial_temperature(50.0)
                    .with_min_temperature(50.0 * 0.5f64.powi(epochs) * 1.01)
                    .with_cooling_rate(0.5)
                    .with_epoch_length(1)
                    .with_move_kind(move_kind)
                    .with_seed(seed)
            };
            let full = SaRunner::run(&instance, start.clone(), &config_for(12)).unwrap();
            prop_assert_eq!(full.epochs, 12);

            // same seed, shorter schedule: the state after `k` proposals
            for k in 1..=12 {
                let step = SaRunner::run(&instance, start.clone(), &config_for(k)).unwrap();
                prop_assert_eq!(step.epochs, k as usize);
                prop_assert!(step.tour.validate(n).is_ok(), "invalid tour after step {}", k);
                prop_assert!(
                    (step.tour.cost(&instance) - full.cost_history[k as usize]).abs() < 1e-6
                );
            }
        }
    }
}
