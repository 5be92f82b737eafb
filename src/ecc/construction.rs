//! Parity-check and generator matrices for a binary Hamming code.
//!
//! For a size parameter `m` the parity-check matrix `H` has `n = 2^m - 1` rows,
//! each the `m`-bit binary representation of one integer in `1..=n` with the
//! most significant bit in column 0. Integers that are not powers of two (the
//! data positions) fill `H` from the top in ascending order; powers of two (the
//! check positions) fill it from the bottom, so `1` lands on the last row, `2` on
//! the one above it, and so on. The resulting check rows form an identity block,
//! which lets the generator matrix be written in systematic form:
//!
//! ```text
//! G = [ I_k | H_data ]
//! ```
//!
//! where `H_data` is the first `k = n - m` rows of `H`.
//!
//! Because rows are permuted, a syndrome read as an integer `v` is not a bit
//! index. [`CodeMatrices::position_of`] translates it through the mapping
//! recorded while `H` was filled.

use crate::ecc::matrix::BitMatrix;
use crate::error::{Error, Result};

/// Smallest accepted size parameter
pub const MIN_SIZE_PARAMETER: usize = 2;
/// Largest accepted size parameter; the generator matrix grows as `4^m`
pub const MAX_SIZE_PARAMETER: usize = 12;

/// Matrices and position mapping of a Hamming code, fixed after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMatrices {
    size_parameter: usize,
    total_length: usize,
    data_length: usize,
    parity_check: BitMatrix,
    generator: BitMatrix,
    /// `integer_positions[v - 1]` is the row of `H` holding the binary form of `v`
    integer_positions: Vec<usize>,
}

impl CodeMatrices {
    /// Builds `H`, `G` and the integer-position mapping for size parameter `m`
    ///
    /// # Arguments
    ///
    /// * `size_parameter` - Number of check bits `m`, between
    ///   [`MIN_SIZE_PARAMETER`] and [`MAX_SIZE_PARAMETER`]
    pub fn new(size_parameter: usize) -> Result<Self> {
        if size_parameter < MIN_SIZE_PARAMETER {
            return Err(Error::InvalidInput(format!(
                "Size parameter must be at least {}, got {}",
                MIN_SIZE_PARAMETER, size_parameter
            )));
        }
        if size_parameter > MAX_SIZE_PARAMETER {
            return Err(Error::InvalidInput(format!(
                "Size parameter must be at most {}, got {}",
                MAX_SIZE_PARAMETER, size_parameter
            )));
        }

        let total_length = (1usize << size_parameter) - 1;
        let data_length = total_length - size_parameter;

        let (parity_check, integer_positions) =
            Self::build_parity_check(size_parameter, total_length);
        let generator = Self::build_generator(&parity_check, data_length, total_length);

        Ok(CodeMatrices {
            size_parameter,
            total_length,
            data_length,
            parity_check,
            generator,
            integer_positions,
        })
    }

    fn build_parity_check(size_parameter: usize, total_length: usize) -> (BitMatrix, Vec<usize>) {
        let mut matrix = BitMatrix::zeros(total_length, size_parameter);
        let mut positions = Vec::with_capacity(total_length);
        let mut next_data_row = 0;
        let mut next_check_row = total_length;

        for value in 1..=total_length {
            let row = if value & (value - 1) == 0 {
                next_check_row -= 1;
                next_check_row
            } else {
                next_data_row += 1;
                next_data_row - 1
            };

            for col in 0..size_parameter {
                let shift = size_parameter - 1 - col;
                matrix.set(row, col, (value >> shift) & 1 == 1);
            }
            positions.push(row);
        }

        (matrix, positions)
    }

    fn build_generator(
        parity_check: &BitMatrix,
        data_length: usize,
        total_length: usize,
    ) -> BitMatrix {
        let mut generator = BitMatrix::zeros(data_length, total_length);
        for row in 0..data_length {
            generator.set(row, row, true);
            for col in parity_check.row(row).iter_ones() {
                generator.set(row, data_length + col, true);
            }
        }
        generator
    }

    /// The size parameter `m`
    pub fn size_parameter(&self) -> usize {
        self.size_parameter
    }

    /// Codeword length `n = 2^m - 1`
    pub fn total_length(&self) -> usize {
        self.total_length
    }

    /// Source word length `k = n - m`
    pub fn data_length(&self) -> usize {
        self.data_length
    }

    /// The `n × m` parity-check matrix
    pub fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// The `k × n` systematic generator matrix
    pub fn generator(&self) -> &BitMatrix {
        &self.generator
    }

    /// Physical row of the integer `value` (in `1..=n`), or `None` outside that range
    pub fn position_of(&self, value: usize) -> Option<usize> {
        value
            .checked_sub(1)
            .and_then(|index| self.integer_positions.get(index))
            .copied()
    }

    /// The full mapping, indexed by `value - 1`
    pub fn integer_positions(&self) -> &[usize] {
        &self.integer_positions
    }
}
