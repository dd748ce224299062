//! City coordinates and coordinate metrics.

/// A city location in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Distance function used to turn coordinates into a distance matrix.
///
/// All variants are symmetric and return 0 for identical points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Straight-line distance, `sqrt(dx² + dy²)`.
    #[default]
    Euclidean,
    /// Taxicab distance, `|dx| + |dy|`.
    Manhattan,
    /// Chessboard distance, `max(|dx|, |dy|)`.
    Chebyshev,
}

impl Metric {
    #[inline]
    pub fn distance(self, a: Point, b: Point) -> f64 {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        match self {
            Metric::Euclidean => dx.hypot(dy),
            Metric::Manhattan => dx + dy,
            Metric::Chebyshev => dx.max(dy),
        }
    }
}
