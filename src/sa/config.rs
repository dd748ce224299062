//! SA configuration and geometric cooling schedule.

use crate::error::{Result, TspError};
use crate::tour::MoveKind;

/// Configuration for Simulated Annealing.
///
/// Temperature starts at `initial_temperature` and is multiplied by
/// `cooling_rate` after every epoch of `epoch_length` proposals. The
/// number of epochs is fixed up front by [`SaConfig::epoch_count`].
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_min_temperature(0.01)
///     .with_cooling_rate(0.9)
///     .with_epoch_length(200);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.epoch_count(), 88);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Starting temperature `T_max`. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Stopping temperature `T_min`.
    pub min_temperature: f64,

    /// Geometric cooling factor `r` in (0, 1). Higher = slower cooling.
    ///
    /// Typical values: 0.9–0.99.
    pub cooling_rate: f64,

    /// Proposals evaluated at each temperature.
    pub epoch_length: usize,

    /// Move proposed at each step.
    pub move_kind: MoveKind,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            min_temperature: 1e-3,
            cooling_rate: 0.95,
            epoch_length: 100,
            move_kind: MoveKind::Swap,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, r: f64) -> Self {
        self.cooling_rate = r;
        self
    }

    pub fn with_epoch_length(mut self, n: usize) -> Self {
        self.epoch_length = n;
        self
    }

    pub fn with_move_kind(mut self, kind: MoveKind) -> Self {
        self.move_kind = kind;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(TspError::invalid_config(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if self.min_temperature.is_nan() || self.min_temperature <= 0.0 {
            return Err(TspError::invalid_config(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            )));
        }
        if self.min_temperature >= self.initial_temperature {
            return Err(TspError::invalid_config(
                "min_temperature must be less than initial_temperature",
            ));
        }
        if !(0.0 < self.cooling_rate && self.cooling_rate < 1.0) {
            return Err(TspError::invalid_config(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.epoch_length == 0 {
            return Err(TspError::invalid_config("epoch_length must be at least 1"));
        }
        Ok(())
    }

    /// Number of epochs the schedule runs:
    /// `⌈(ln T_min − ln T_max) / ln r⌉`.
    ///
    /// Only meaningful for a configuration that passes
    /// [`SaConfig::validate`].
    pub fn epoch_count(&self) -> usize {
        let epochs = (self.min_temperature.ln() - self.initial_temperature.ln())
            / self.cooling_rate.ln();
        epochs.ceil() as usize
    }
}
