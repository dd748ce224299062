//! Dense symmetric distance matrix.

use crate::error::{Result, TspError};

/// Relative tolerance when checking user-supplied rows for symmetry.
const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// Dense `n × n` distance matrix, stored row-major.
///
/// Construction validates that the matrix is square, symmetric,
/// non-negative, finite and has a zero diagonal. Lookups never re-check
/// any of this.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp::problem::DistanceMatrix;
    ///
    /// let m = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 2.0, 9.0],
    ///     vec![2.0, 0.0, 6.0],
    ///     vec![9.0, 6.0, 0.0],
    /// ])
    /// .unwrap();
    /// assert_eq!(m.get(2, 1), 6.0);
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n < 3 {
            return Err(TspError::TooFewCities(n));
        }
        let mut data = Vec::with_capacity(n * n);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(TspError::NotSquare {
                    row,
                    len: values.len(),
                    n,
                });
            }
            data.extend(values);
        }
        let matrix = Self { n, data };
        matrix.check()?;
        Ok(matrix)
    }

    /// Builds a matrix by evaluating `f` on every ordered pair `i != j`.
    /// The diagonal is zero.
    ///
    /// `f` must be symmetric: `f(i, j)` and `f(j, i)` are both evaluated
    /// and a mismatch is rejected like an asymmetric row.
    pub fn from_fn<F>(n: usize, f: F) -> Result<Self>
    where
        F: Fn(usize, usize) -> f64,
    {
        if n < 3 {
            return Err(TspError::TooFewCities(n));
        }
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (0..n).filter(|&j| j != i) {
                data[i * n + j] = f(i, j);
            }
        }
        let matrix = Self { n, data };
        matrix.check()?;
        Ok(matrix)
    }

    fn check(&self) -> Result<()> {
        let n = self.n;
        for i in 0..n {
            let diag = self.get(i, i);
            if diag != 0.0 {
                return Err(TspError::InvalidDistance { i, j: i, value: diag });
            }
            for j in (i + 1)..n {
                let forward = self.get(i, j);
                let backward = self.get(j, i);
                for (a, b, value) in [(i, j, forward), (j, i, backward)] {
                    if !value.is_finite() || value < 0.0 {
                        return Err(TspError::InvalidDistance { i: a, j: b, value });
                    }
                }
                let scale = forward.abs().max(backward.abs()).max(1.0);
                if (forward - backward).abs() > SYMMETRY_TOLERANCE * scale {
                    return Err(TspError::Asymmetric {
                        i,
                        j,
                        forward,
                        backward,
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of cities.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.n + j]
    }

    /// The `i`-th row.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}
