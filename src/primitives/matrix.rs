//! Matrix type for 2D numeric data.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{MatrizError, Result};

/// A 2D matrix of floating-point values (row-major storage).
///
/// Equality is exact: two matrices are `==` iff their shapes match and
/// every pair of corresponding cells compares equal under plain `f64`
/// equality. There is no tolerance, so `NaN` cells never compare equal.
///
/// A matrix with zero rows stores no columns either: `n_cols()` of any
/// zero-row matrix is 0, whatever width was requested.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).expect("data length matches rows * cols");
/// assert_eq!(m.shape(), (2, 3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(MatrizError::DataLength {
                expected: rows * cols,
                actual: data.len(),
            });
        }
        Ok(Self::normalized(rows, cols, data))
    }

    // A zero-row matrix stores no columns.
    fn normalized(rows: usize, cols: usize, data: Vec<T>) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        Self { data, rows, cols }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns, 0 for a zero-row matrix.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the matrix holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if the row index is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> &[T] {
        let start = row_idx * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Returns a column as an owned vector.
    ///
    /// # Panics
    ///
    /// Panics if the column index is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vec<T> {
        (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect()
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T> Default for Matrix<T> {
    /// The empty 0x0 matrix.
    fn default() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }
}

impl Matrix<f64> {
    /// Creates a zero-filled matrix of the given shape.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::normalized(rows, cols, vec![0.0; rows * cols])
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self::normalized(n, n, data)
    }

    /// Creates a matrix filled with random values, see [`Self::randomize`].
    #[must_use]
    pub fn random(rows: usize, cols: usize, seed: Option<u64>) -> Self {
        let mut m = Self::new(rows, cols);
        m.randomize(seed);
        m
    }

    /// Overwrites every cell with a random value from [-1.0, 1.0].
    ///
    /// Values are drawn from the 101 evenly spaced steps
    /// `k/50 - 1` for `k` in `0..=100`, not from a continuous
    /// distribution. Equal seeds produce bit-identical fills.
    pub fn randomize(&mut self, seed: Option<u64>) {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        for value in &mut self.data {
            *value = f64::from(rng.gen_range(0..=100u32)) / 50.0 - 1.0;
        }
    }

    /// Transposes the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self::normalized(self.cols, self.rows, data)
    }

    /// Matrix-matrix multiplication.
    ///
    /// Each output cell accumulates its dot product left to right in
    /// `f64`, so rounding matches a naive sequential summation.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] when the column count
    /// of `self` differs from the row count of `other`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }

        Ok(Self::normalized(self.rows, other.cols, result))
    }

    /// Matrix-matrix multiplication with output rows computed in
    /// parallel.
    ///
    /// Cells are write-disjoint across rows and each cell keeps the
    /// same sequential accumulation order as [`Self::matmul`], so the
    /// result is bit-identical.
    ///
    /// # Errors
    ///
    /// Returns [`MatrizError::DimensionMismatch`] when the column count
    /// of `self` differs from the row count of `other`.
    pub fn par_matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::dimension_mismatch(
                self.shape(),
                other.shape(),
            ));
        }

        let mut result = vec![0.0; self.rows * other.cols];
        // rayon rejects a zero chunk length; a zero-column product has
        // nothing to fill anyway.
        result
            .par_chunks_mut(other.cols.max(1))
            .enumerate()
            .for_each(|(i, out_row)| {
                for (j, out) in out_row.iter_mut().enumerate() {
                    let mut sum = 0.0;
                    for k in 0..self.cols {
                        sum += self.get(i, k) * other.get(k, j);
                    }
                    *out = sum;
                }
            });

        Ok(Self::normalized(self.rows, other.cols, result))
    }

    /// Multiplies like [`Self::matmul`], but on a dimension mismatch
    /// writes a one-line diagnostic to stderr and returns the empty
    /// 0x0 matrix instead of an error.
    ///
    /// The empty return value doubles as the failure signal, so
    /// callers that need to tell a failed product from a legitimately
    /// empty one should use [`Self::matmul`].
    #[must_use]
    pub fn multiply_or_empty(&self, other: &Self) -> Self {
        match self.matmul(other) {
            Ok(product) => product,
            Err(_) => {
                eprintln!(
                    "multiply: incorrect matrix dimensions ({}x{} * {}x{})",
                    self.rows, self.cols, other.rows, other.cols
                );
                Self::default()
            }
        }
    }

    /// Writes the matrix to stdout, one line per row.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Matrix<f64> {
    /// One line per row; each cell is right-aligned in a 5-wide field
    /// with two decimals and a trailing space.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for value in self.row(r) {
                write!(f, "{value:5.2} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "matrix_proptests.rs"]
mod proptests;
