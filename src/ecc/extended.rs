//! Extended Hamming code (SEC-DED).
//!
//! Appends an overall even-parity bit to every Hamming codeword. The extended
//! parity-check matrix `H'` has one more row and one more column than `H`:
//!
//! ```text
//!        [ 0 ... 0 | 1 ]   <- the parity bit itself
//! H'  =  [    H    | 1 ]   <- every base row also feeds the overall parity
//! ```
//!
//! Row 0 belongs to the appended parity bit, which sits at index `n` of the
//! codeword; row `r >= 1` belongs to codeword index `r - 1`.
//!
//! A single error produces a syndrome equal to exactly one row of `H'`. Every
//! row ends in a 1, so the sum of two distinct rows ends in a 0 and matches no
//! row: that is how double errors are told apart from single ones.

use crate::ecc::hamming::HammingCode;
use crate::ecc::matrix::{render_word, BitMatrix};
use crate::ecc::{Codec, DecodeOutcome};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use log::{debug, warn};

/// Hamming code with an additional overall parity bit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedHammingCode {
    base: HammingCode,
    parity_check: BitMatrix,
}

impl ExtendedHammingCode {
    /// Creates the extended code on top of the Hamming code with `size_parameter` check bits
    pub fn new(size_parameter: usize) -> Result<Self> {
        let base = HammingCode::new(size_parameter)?;
        Ok(Self::from_base(base))
    }

    /// Extends an existing Hamming code
    pub fn from_base(base: HammingCode) -> Self {
        let m = base.size_parameter();
        let n = base.total_length();

        let mut parity_check = BitMatrix::zeros(n + 1, m + 1);
        parity_check.set(0, m, true);
        for row in 0..n {
            for col in base.parity_check().row(row).iter_ones() {
                parity_check.set(row + 1, col, true);
            }
            parity_check.set(row + 1, m, true);
        }

        debug!(
            "built extended Hamming code [{}, {}]",
            n + 1,
            base.data_length()
        );
        ExtendedHammingCode { base, parity_check }
    }

    /// The wrapped base code
    pub fn base(&self) -> &HammingCode {
        &self.base
    }

    /// The `(n + 1) × (m + 1)` extended parity-check matrix
    pub fn parity_check(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// Codeword index checked by row `row` of `H'`
    fn position_of_row(&self, row: usize) -> usize {
        if row == 0 {
            self.base.total_length()
        } else {
            row - 1
        }
    }

    /// Syndrome of a received `(n + 1)`-bit word against `H'`
    pub fn syndrome(&self, word: &BitSlice) -> Result<BitVec> {
        Error::check_len("codeword", self.total_length(), word.len())?;

        let n = self.base.total_length();
        let mut aligned = BitVec::with_capacity(n + 1);
        aligned.push(word[n]);
        aligned.extend_from_bitslice(&word[..n]);
        HammingCode::syndrome(&aligned, &self.parity_check)
    }
}

impl Codec for ExtendedHammingCode {
    fn total_length(&self) -> usize {
        self.base.total_length() + 1
    }

    fn data_length(&self) -> usize {
        self.base.data_length()
    }

    fn encode(&self, source: &BitSlice) -> Result<BitVec> {
        let mut encoded = self.base.encode(source)?;
        let parity = encoded.count_ones() % 2 == 1;
        encoded.push(parity);
        Ok(encoded)
    }

    fn correct(&self, word: &mut BitSlice) -> Result<DecodeOutcome> {
        let syndrome = self.syndrome(word)?;
        if syndrome.not_any() {
            return Ok(DecodeOutcome::Clean);
        }

        let matched = self
            .parity_check
            .iter_rows()
            .position(|row| row == syndrome.as_bitslice());

        match matched {
            Some(row) => {
                let position = self.position_of_row(row);
                let bit = word[position];
                word.set(position, !bit);
                debug!("corrected bit {} of extended codeword", position);
                Ok(DecodeOutcome::Corrected(position))
            }
            None => {
                warn!("double error detected, syndrome {}", render_word(&syndrome));
                Ok(DecodeOutcome::Uncorrectable)
            }
        }
    }
}
