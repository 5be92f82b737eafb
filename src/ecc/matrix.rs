//! Dense bit matrices over GF(2).
//!
//! Rows are stored as `BitVec`s of equal length. Multiplication follows the
//! row-vector convention used by the codes in this crate: a word `w` of
//! `rows()` bits times the matrix gives `cols()` bits, where bit `j` is the XOR
//! of `w[i] & m[i][j]` over all `i`.

use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt::{self, Display, Formatter};

/// Fixed-size boolean matrix with GF(2) arithmetic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    rows: Vec<BitVec>,
    cols: usize,
}

impl BitMatrix {
    /// Creates an all-zero matrix with the given dimensions
    pub fn zeros(rows: usize, cols: usize) -> Self {
        BitMatrix {
            rows: vec![BitVec::repeat(false, cols); rows],
            cols,
        }
    }

    /// Builds a matrix from rows, all of which must have the same length
    pub fn from_rows(rows: Vec<BitVec>) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        for row in &rows {
            Error::check_len("matrix row", cols, row.len())?;
        }
        Ok(BitMatrix { rows, cols })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Borrow a single row
    pub fn row(&self, index: usize) -> &BitSlice {
        &self.rows[index]
    }

    /// Iterate over the rows in order
    pub fn iter_rows(&self) -> impl Iterator<Item = &BitSlice> + '_ {
        self.rows.iter().map(|row| row.as_bitslice())
    }

    /// Read one entry
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.rows[row][col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, value: bool) {
        self.rows[row].set(col, value);
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut BitSlice {
        &mut self.rows[index]
    }

    /// Row-vector product `word · self` over GF(2)
    pub fn left_multiply(&self, word: &BitSlice) -> Result<BitVec> {
        Error::check_len("word", self.rows(), word.len())?;

        let mut product = BitVec::repeat(false, self.cols);
        for row_index in word.iter_ones() {
            for col in self.rows[row_index].iter_ones() {
                let bit = product[col];
                product.set(col, !bit);
            }
        }
        Ok(product)
    }

    /// Product `self · otherᵗ` over GF(2); both matrices need the same column count
    pub fn multiply_transpose(&self, other: &BitMatrix) -> Result<BitMatrix> {
        Error::check_len("matrix columns", self.cols, other.cols)?;

        let mut product = BitMatrix::zeros(self.rows(), other.rows());
        for (i, left) in self.rows.iter().enumerate() {
            for (j, right) in other.rows.iter().enumerate() {
                let parity = left
                    .iter()
                    .by_vals()
                    .zip(right.iter().by_vals())
                    .filter(|&(a, b)| a && b)
                    .count()
                    % 2
                    == 1;
                product.set(i, j, parity);
            }
        }
        Ok(product)
    }

    /// The transpose of this matrix
    pub fn transpose(&self) -> BitMatrix {
        let mut transposed = BitMatrix::zeros(self.cols, self.rows());
        for (i, row) in self.rows.iter().enumerate() {
            for j in row.iter_ones() {
                transposed.set(j, i, true);
            }
        }
        transposed
    }

    /// True if every entry is zero
    pub fn is_zero(&self) -> bool {
        self.rows.iter().all(|row| row.not_any())
    }
}

/// Renders a word as space separated `0`/`1` digits
pub fn render_word(word: &BitSlice) -> String {
    word.iter()
        .by_vals()
        .map(|bit| if bit { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Display for BitMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", render_word(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix(rows: &[&str]) -> BitMatrix {
        BitMatrix::from_rows(
            rows.iter()
                .map(|row| row.chars().map(|c| c == '1').collect())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let result = BitMatrix::from_rows(vec![bitvec![1, 0], bitvec![1]]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_left_multiply() {
        let m = matrix(&["110", "011", "101"]);
        assert_eq!(m.left_multiply(bits![1, 0, 0]).unwrap(), bitvec![1, 1, 0]);
        assert_eq!(m.left_multiply(bits![1, 1, 0]).unwrap(), bitvec![1, 0, 1]);
        assert_eq!(m.left_multiply(bits![1, 1, 1]).unwrap(), bitvec![0, 0, 0]);
        assert!(m.left_multiply(bits![1, 1]).is_err());
    }

    #[test]
    fn test_transpose_and_product() {
        let m = matrix(&["101", "011"]);
        let t = m.transpose();
        assert_eq!(t, matrix(&["10", "01", "11"]));

        // rows 101 and 011 overlap in one position
        let p = m.multiply_transpose(&m).unwrap();
        assert_eq!(p, matrix(&["01", "10"]));
        assert!(!p.is_zero());
    }

    #[test]
    fn test_display() {
        let m = matrix(&["101", "010"]);
        assert_eq!(m.to_string(), "1 0 1\n0 1 0\n");
        assert_eq!(render_word(bits![1, 1, 0]), "1 1 0");
    }
}
