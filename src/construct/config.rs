//! Construction configuration.

use crate::error::{Result, TspError};

/// Which construction heuristic to run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstructionMethod {
    /// Nearest neighbor from `start_city` (city 0 if unset).
    #[default]
    NearestNeighbor,
    /// Nearest neighbor from every city, or from `sample_size` random
    /// cities, keeping the cheapest tour.
    BestOfNearestNeighbor,
    /// Greedy edge matching with union-find cycle detection.
    GreedyEdge,
    /// Cheapest-position insertion of cities in random order.
    RandomInsertion,
}

/// Configuration for building an initial tour.
///
/// # Examples
///
/// ```
/// use u_tsp::construct::{ConstructionConfig, ConstructionMethod};
///
/// let config = ConstructionConfig::default()
///     .with_method(ConstructionMethod::BestOfNearestNeighbor)
///     .with_sample_size(16)
///     .with_seed(7);
/// assert_eq!(config.sample_size, Some(16));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstructionConfig {
    pub method: ConstructionMethod,

    /// Start city for [`ConstructionMethod::NearestNeighbor`].
    pub start_city: Option<usize>,

    /// Number of sampled start cities for
    /// [`ConstructionMethod::BestOfNearestNeighbor`]. `None` or a value
    /// `≥ n` tries every city.
    pub sample_size: Option<usize>,

    /// Random seed (None for entropy).
    pub seed: Option<u64>,
}

impl ConstructionConfig {
    pub fn with_method(mut self, method: ConstructionMethod) -> Self {
        self.method = method;
        self
    }

    pub fn with_start_city(mut self, city: usize) -> Self {
        self.start_city = Some(city);
        self
    }

    pub fn with_sample_size(mut self, k: usize) -> Self {
        self.sample_size = Some(k);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration against an instance of `n` cities.
    pub fn validate(&self, n: usize) -> Result<()> {
        if let Some(city) = self.start_city {
            if city >= n {
                return Err(TspError::CityOutOfRange { city, n });
            }
        }
        if self.sample_size == Some(0) {
            return Err(TspError::invalid_config("sample_size must be at least 1"));
        }
        Ok(())
    }
}
