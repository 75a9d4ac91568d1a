//! Dynamically sized row-major matrix with cofactor-expansion inversion.
//!
//! # Convention
//! - Storage is **row-major**: `data[row * cols + col]`
//! - Vectors are **row vectors** on the left: `[p] * M`
//! - Products chain **left-to-right**: `A * B * C` applies A first
//!
//! # Complexity
//! [`Matrix::determinant`] recurses over first-row minors, which is O(n!).
//! It is only meant for the 4x4 (or smaller) matrices of the transform
//! pipeline; do not feed it large matrices.
//!
//! The renderer only reaches this type through [`Mat4::inverse`]; the rest is
//! the general kernel surface, mirrored by the fixed-size `Mat4` operators.

use crate::error::{RenderError, Result};

use super::mat4::Mat4;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Creates a matrix from row-major data.
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(RenderError::DimensionMismatch {
                expected: 1,
                found: 0,
            });
        }
        if data.len() != rows * cols {
            return Err(RenderError::DimensionMismatch {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Creates a matrix from a list of rows.
    pub fn from_rows<const N: usize>(rows: &[[f32; N]]) -> Result<Self> {
        Self::new(rows.len(), N, rows.iter().flatten().copied().collect())
    }

    /// A single-row matrix, the form points take when transformed.
    pub fn row_vector(v: &[f32]) -> Result<Self> {
        Self::new(1, v.len(), v.to_vec())
    }

    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            rows: n,
            cols: n,
            data,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Access element at [row][col].
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.data[row * self.cols + col]
    }

    /// Borrow a row as a slice.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Matrix product `self * rhs`; requires `cols(self) == rows(rhs)`.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix> {
        if self.cols != rhs.rows {
            return Err(RenderError::DimensionMismatch {
                expected: self.cols,
                found: rhs.rows,
            });
        }
        let mut data = vec![0.0f32; self.rows * rhs.cols];
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                data[row * rhs.cols + col] = (0..self.cols)
                    .map(|k| self.get(row, k) * rhs.get(k, col))
                    .sum();
            }
        }
        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            data,
        })
    }

    /// Multiplies `M1 * M2 * ... * Mn` left to right.
    pub fn multiply_chain(matrices: &[&Matrix]) -> Result<Matrix> {
        let (first, rest) = matrices
            .split_first()
            .ok_or(RenderError::DimensionMismatch {
                expected: 1,
                found: 0,
            })?;
        rest.iter()
            .try_fold((*first).clone(), |acc, m| acc.multiply(m))
    }

    pub fn transpose(&self) -> Matrix {
        let mut data = Vec::with_capacity(self.data.len());
        for col in 0..self.cols {
            for row in 0..self.rows {
                data.push(self.get(row, col));
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// The submatrix left after deleting `row` and `col`.
    ///
    /// Fails with [`RenderError::DimensionMismatch`] when either index is out
    /// of range or the result would be empty.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        self.ensure_index(row, col)?;
        if self.rows < 2 || self.cols < 2 {
            return Err(RenderError::DimensionMismatch {
                expected: 2,
                found: self.rows.min(self.cols),
            });
        }
        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        let data = (0..self.rows)
            .filter(|&r| r != row)
            .flat_map(|r| {
                (0..self.cols)
                    .filter(move |&c| c != col)
                    .map(move |c| self.get(r, c))
            })
            .collect();
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            data,
        }
    }

    fn ensure_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(RenderError::DimensionMismatch {
                expected: self.rows,
                found: row,
            });
        }
        if col >= self.cols {
            return Err(RenderError::DimensionMismatch {
                expected: self.cols,
                found: col,
            });
        }
        Ok(())
    }

    fn ensure_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(RenderError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Determinant by Laplace expansion along the first row.
    pub fn determinant(&self) -> Result<f32> {
        self.ensure_square()?;
        Ok(self.determinant_unchecked())
    }

    fn determinant_unchecked(&self) -> f32 {
        match self.rows {
            1 => self.data[0],
            2 => self.data[0] * self.data[3] - self.data[1] * self.data[2],
            n => (0..n)
                .map(|col| self.get(0, col) * self.cofactor_unchecked(0, col))
                .sum(),
        }
    }

    /// Signed minor: `(-1)^(row+col) * det(minor(row, col))`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f32> {
        self.ensure_square()?;
        if self.rows < 2 {
            return Err(RenderError::DimensionMismatch {
                expected: 2,
                found: self.rows,
            });
        }
        self.ensure_index(row, col)?;
        Ok(self.cofactor_unchecked(row, col))
    }

    fn cofactor_unchecked(&self, row: usize, col: usize) -> f32 {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor_unchecked(row, col).determinant_unchecked()
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Result<Matrix> {
        self.ensure_square()?;
        if self.rows == 1 {
            return Ok(Matrix::identity(1));
        }
        let n = self.rows;
        let mut data = vec![0.0f32; n * n];
        for row in 0..n {
            for col in 0..n {
                // Written transposed: adj[col][row] = C[row][col]
                data[col * n + row] = self.cofactor_unchecked(row, col);
            }
        }
        Ok(Matrix {
            rows: n,
            cols: n,
            data,
        })
    }

    /// Inverse via the adjugate divided by the determinant.
    ///
    /// Fails with [`RenderError::SingularMatrix`] when the determinant is zero.
    pub fn inverse(&self) -> Result<Matrix> {
        let det = self.determinant()?;
        if det == 0.0 || !det.is_finite() {
            return Err(RenderError::SingularMatrix);
        }
        let mut adjugate = self.adjugate()?;
        adjugate.data.iter_mut().for_each(|v| *v /= det);
        Ok(adjugate)
    }
}

impl From<Mat4> for Matrix {
    fn from(m: Mat4) -> Self {
        let data = (0..4)
            .flat_map(|row| (0..4).map(move |col| m.get(row, col)))
            .collect();
        Matrix {
            rows: 4,
            cols: 4,
            data,
        }
    }
}

impl TryFrom<&Matrix> for Mat4 {
    type Error = RenderError;

    fn try_from(m: &Matrix) -> Result<Self> {
        if m.rows != 4 || m.cols != 4 {
            return Err(RenderError::DimensionMismatch {
                expected: 16,
                found: m.rows * m.cols,
            });
        }
        let mut data = [[0.0f32; 4]; 4];
        for (row, out) in data.iter_mut().enumerate() {
            out.copy_from_slice(m.row(row));
        }
        Ok(Mat4::new(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_identity(m: &Matrix) {
        for row in 0..m.rows() {
            for col in 0..m.cols() {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_relative_eq!(m.get(row, col), expected, epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn determinant_closed_forms() {
        let one = Matrix::from_rows(&[[5.0]]).unwrap();
        assert_eq!(one.determinant().unwrap(), 5.0);

        let two = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(two.determinant().unwrap(), -2.0);

        let three =
            Matrix::from_rows(&[[2.0, 0.0, 1.0], [1.0, 3.0, 2.0], [1.0, 1.0, 2.0]]).unwrap();
        assert_relative_eq!(three.determinant().unwrap(), 6.0, epsilon = 1e-6);
    }

    #[test]
    fn multiply_by_inverse_is_identity() {
        let m = Matrix::from_rows(&[
            [4.0, 7.0, 2.0, 0.0],
            [3.0, 6.0, 1.0, 0.0],
            [2.0, 5.0, 3.0, 0.0],
            [1.0, -2.0, 0.5, 1.0],
        ])
        .unwrap();
        let inv = m.inverse().unwrap();
        assert_identity(&m.multiply(&inv).unwrap());
        assert_identity(&inv.multiply(&m).unwrap());
    }

    #[test]
    fn inverse_of_small_sizes() {
        let one = Matrix::from_rows(&[[4.0]]).unwrap();
        assert_relative_eq!(one.inverse().unwrap().get(0, 0), 0.25);

        let two = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]]).unwrap();
        assert_identity(&two.multiply(&two.inverse().unwrap()).unwrap());
    }

    #[test]
    fn singular_matrix_is_rejected() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap();
        assert!(matches!(m.inverse(), Err(RenderError::SingularMatrix)));
    }

    #[test]
    fn non_square_matrix_has_no_determinant() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        assert!(matches!(
            m.determinant(),
            Err(RenderError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn chain_multiplies_left_to_right() {
        let p = Matrix::row_vector(&[1.0, 2.0, 3.0, 1.0]).unwrap();
        let translate = Matrix::from_rows(&[
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [10.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        let scale = Matrix::from_rows(&[
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
        .unwrap();
        // Translate first, then scale
        let out = Matrix::multiply_chain(&[&p, &translate, &scale]).unwrap();
        assert_eq!(out.row(0), &[22.0, 4.0, 6.0, 1.0]);
    }

    #[test]
    fn chain_rejects_mismatched_dimensions() {
        let a = Matrix::from_rows(&[[1.0, 2.0]]).unwrap();
        let b = Matrix::identity(3);
        assert!(Matrix::multiply_chain(&[&a, &b]).is_err());
        assert!(Matrix::multiply_chain(&[]).is_err());
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t.row(0), &[1.0, 4.0]);
        assert_eq!(t.row(2), &[3.0, 6.0]);
    }

    #[test]
    fn minor_removes_row_and_column() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]).unwrap();
        let minor = m.minor(1, 2).unwrap();
        assert_eq!((minor.rows(), minor.cols()), (2, 2));
        assert_eq!(minor.row(0), &[1.0, 2.0]);
        assert_eq!(minor.row(1), &[7.0, 8.0]);
        assert_relative_eq!(m.cofactor(0, 0).unwrap(), 2.0);
        assert_relative_eq!(m.cofactor(0, 1).unwrap(), 2.0);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]).unwrap();
        assert!(matches!(
            m.minor(7, 7),
            Err(RenderError::DimensionMismatch { expected: 3, found: 7 })
        ));
        assert!(matches!(
            m.minor(0, 3),
            Err(RenderError::DimensionMismatch { expected: 3, found: 3 })
        ));
        assert!(matches!(
            m.cofactor(7, 7),
            Err(RenderError::DimensionMismatch { .. })
        ));
        assert!(m.cofactor(2, 3).is_err());
    }

    #[test]
    fn one_by_one_has_no_minor() {
        let m = Matrix::new(1, 1, vec![4.0]).unwrap();
        assert!(m.minor(0, 0).is_err());
    }
}
