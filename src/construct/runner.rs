//! Construction dispatch.

use rand::Rng;

use super::config::{ConstructionConfig, ConstructionMethod};
use super::greedy::greedy_edge;
use super::insertion::random_insertion;
use super::nearest::{nearest_neighbor, nearest_neighbor_best_of};
use crate::error::Result;
use crate::problem::Instance;
use crate::random::rng_from_seed;
use crate::tour::Tour;

/// A freshly built tour and its total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Construction {
    pub tour: Tour,
    pub cost: f64,
}

/// Builds initial tours.
pub struct ConstructionRunner;

impl ConstructionRunner {
    /// Runs the configured construction heuristic, seeding its generator
    /// from `config.seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::construct::{ConstructionConfig, ConstructionMethod, ConstructionRunner};
    /// use u_tsp::problem::{Instance, Point};
    ///
    /// let instance = Instance::euclidean(vec![
    ///     Point::new(0.0, 0.0),
    ///     Point::new(1.0, 0.0),
    ///     Point::new(1.0, 1.0),
    ///     Point::new(0.0, 1.0),
    /// ])
    /// .unwrap();
    /// let config = ConstructionConfig::default().with_method(ConstructionMethod::GreedyEdge);
    /// let built = ConstructionRunner::run(&instance, &config).unwrap();
    /// assert!((built.cost - 4.0).abs() < 1e-12);
    /// ```
    pub fn run(instance: &Instance, config: &ConstructionConfig) -> Result<Construction> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(instance, config, &mut rng)
    }

    /// Runs the configured construction heuristic with a caller-owned
    /// generator.
    #[tracing::instrument(level = "debug", skip_all, fields(n = instance.n(), method = ?config.method))]
    pub fn run_with_rng<R: Rng>(
        instance: &Instance,
        config: &ConstructionConfig,
        rng: &mut R,
    ) -> Result<Construction> {
        config.validate(instance.n())?;
        let built = match config.method {
            ConstructionMethod::NearestNeighbor => {
                nearest_neighbor(instance, config.start_city.unwrap_or(0))?
            }
            ConstructionMethod::BestOfNearestNeighbor => {
                nearest_neighbor_best_of(instance, config.sample_size, rng)?
            }
            ConstructionMethod::GreedyEdge => greedy_edge(instance),
            ConstructionMethod::RandomInsertion => random_insertion(instance, rng),
        };
        tracing::debug!(cost = built.cost, "constructed initial tour");
        Ok(built)
    }
}
