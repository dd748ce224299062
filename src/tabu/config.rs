//! Tabu Search run parameters.

use crate::error::{Result, TspError};

/// Tabu Search parameters: run length, tenure and aspiration.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// assert!(config.validate(20).is_ok());
/// assert!(config.validate(7).is_err());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of iterations. The search always runs all of them.
    pub max_iterations: usize,
    /// How many iterations a touched tour position stays tabu.
    pub tabu_tenure: usize,
    /// Let a tabu move through when it would beat the best cost seen so
    /// far. Off by default.
    pub aspiration: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            tabu_tenure: 7,
            aspiration: false,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Toggles the aspiration override.
    pub fn with_aspiration(mut self, aspiration: bool) -> Self {
        self.aspiration = aspiration;
        self
    }

    /// Validates the configuration for an instance of `n` cities.
    ///
    /// A tenure of `n` or more would lock every position.
    pub fn validate(&self, n: usize) -> Result<()> {
        if self.tabu_tenure >= n {
            return Err(TspError::invalid_config(format!(
                "tabu_tenure must be less than the number of cities ({n}), got {}",
                self.tabu_tenure
            )));
        }
        Ok(())
    }
}
