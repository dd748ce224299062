//! Error type shared by every module of the crate.

use thiserror::Error as ThisError;

/// Errors raised when an instance, tour or configuration breaks a
/// precondition.
///
/// None of these are recoverable inside the toolkit: a runner that
/// returns one has not started iterating.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum TspError {
    #[error("an instance needs at least 3 cities, got {0}")]
    TooFewCities(usize),

    #[error("distance matrix is not square: row {row} has {len} entries, expected {n}")]
    NotSquare { row: usize, len: usize, n: usize },

    #[error("distance matrix is asymmetric at ({i}, {j}): {forward} vs {backward}")]
    Asymmetric {
        i: usize,
        j: usize,
        forward: f64,
        backward: f64,
    },

    #[error("invalid distance {value} at ({i}, {j})")]
    InvalidDistance { i: usize, j: usize, value: f64 },

    #[error("city {city} is out of range for an instance of {n} cities")]
    CityOutOfRange { city: usize, n: usize },

    #[error("invalid tour: {0}")]
    InvalidTour(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TspError>;

impl TspError {
    pub fn invalid_tour(message: impl Into<String>) -> Self {
        Self::InvalidTour(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
