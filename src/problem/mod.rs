//! Geometry and cost layer.
//!
//! An [`Instance`] owns the city set and a dense symmetric
//! [`DistanceMatrix`]. It is built once per experiment and is read-only
//! for every algorithm that consumes it.
//!
//! Instances can be built from coordinates under a [`Metric`], from
//! precomputed rows, or from any symmetric distance function.

mod instance;
mod matrix;
mod point;

pub use instance::{Instance, BRUTE_FORCE_MAX_CITIES};
pub use matrix::DistanceMatrix;
pub use point::{Metric, Point};
