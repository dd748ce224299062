//! Hill climbing configuration.

/// How each round scans the 2-opt neighbourhood.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanStrategy {
    /// Scan the whole neighbourhood and apply the most improving move.
    #[default]
    BestImprovement,
    /// Apply the first improving move found in enumeration order.
    FirstImprovement,
}

/// Configuration for 2-opt hill climbing.
///
/// # Examples
///
/// ```
/// use u_tsp::hill::{HillClimbConfig, ScanStrategy};
///
/// let config = HillClimbConfig::default()
///     .with_max_iterations(500)
///     .with_strategy(ScanStrategy::FirstImprovement);
/// assert_eq!(config.max_iterations, Some(500));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbConfig {
    /// Maximum number of applied moves. `None` runs to a local optimum.
    pub max_iterations: Option<usize>,

    pub strategy: ScanStrategy,
}

impl HillClimbConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = Some(n);
        self
    }

    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
