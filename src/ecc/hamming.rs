//! Hamming error correction code implementation.
//!
//! Hamming codes are a family of linear error-correcting codes developed by Richard Hamming in 1950.
//! With `m` check bits they protect `2^m - 1 - m` data bits and correct any single bit error.
//! The most common variant is the (7,4) code, `m = 3`.
//!
//! This implementation provides:
//! - Encoding by multiplication with a systematic generator matrix
//! - Syndrome computation against an arbitrary parity-check matrix
//! - Single-bit correction, translating the syndrome integer into a bit position
//!
//! Two or more errors in one word are neither corrected nor detected: the syndrome
//! then names some third position, which is flipped anyway. Use
//! [`ExtendedHammingCode`](crate::ecc::ExtendedHammingCode) when double errors have
//! to be recognised.
//!
//! # Applications
//!
//! - Computer memory (ECC RAM)
//! - Satellite communications
//! - Interleaved links on bursty channels

use crate::ecc::construction::CodeMatrices;
use crate::ecc::matrix::BitMatrix;
use crate::ecc::{Codec, DecodeOutcome};
use crate::error::{Error, Result};
use bitvec::prelude::*;
use log::debug;

/// A `[2^m - 1, 2^m - 1 - m]` binary Hamming code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammingCode {
    matrices: CodeMatrices,
}

impl HammingCode {
    /// Creates the Hamming code with `size_parameter` check bits.
    ///
    /// # Arguments
    ///
    /// * `size_parameter` - Number of check bits `m` (at least 2)
    ///
    /// # Returns
    ///
    /// A new `HammingCode` instance or an error if `m` is out of range
    pub fn new(size_parameter: usize) -> Result<Self> {
        let matrices = CodeMatrices::new(size_parameter)?;
        debug!(
            "built Hamming code [{}, {}] with {} check bits",
            matrices.total_length(),
            matrices.data_length(),
            size_parameter
        );
        Ok(HammingCode { matrices })
    }

    /// Number of check bits `m`
    pub fn size_parameter(&self) -> usize {
        self.matrices.size_parameter()
    }

    /// The matrices the code was built from
    pub fn matrices(&self) -> &CodeMatrices {
        &self.matrices
    }

    /// The `n × m` parity-check matrix
    pub fn parity_check(&self) -> &BitMatrix {
        self.matrices.parity_check()
    }

    /// The `k × n` generator matrix
    pub fn generator(&self) -> &BitMatrix {
        self.matrices.generator()
    }

    /// Computes `word · matrix` over GF(2).
    ///
    /// Shared with the extended code, which passes its own parity-check matrix.
    pub fn syndrome(word: &BitSlice, matrix: &BitMatrix) -> Result<BitVec> {
        matrix.left_multiply(word)
    }

    /// Reads a syndrome as an unsigned integer, column 0 being the most significant bit
    fn syndrome_value(syndrome: &BitSlice) -> usize {
        syndrome
            .iter()
            .by_vals()
            .fold(0, |acc, bit| (acc << 1) | usize::from(bit))
    }
}

impl Codec for HammingCode {
    fn total_length(&self) -> usize {
        self.matrices.total_length()
    }

    fn data_length(&self) -> usize {
        self.matrices.data_length()
    }

    fn encode(&self, source: &BitSlice) -> Result<BitVec> {
        Error::check_len("source word", self.data_length(), source.len())?;
        self.generator().left_multiply(source)
    }

    fn correct(&self, word: &mut BitSlice) -> Result<DecodeOutcome> {
        Error::check_len("codeword", self.total_length(), word.len())?;

        let syndrome = Self::syndrome(word, self.parity_check())?;
        let value = Self::syndrome_value(&syndrome);
        if value == 0 {
            return Ok(DecodeOutcome::Clean);
        }

        // every non-zero m-bit value is some row of H
        let position = self.matrices.position_of(value).ok_or_else(|| {
            Error::InvalidInput(format!("Syndrome {} has no matching position", value))
        })?;
        let bit = word[position];
        word.set(position, !bit);
        debug!("corrected bit {} (syndrome {})", position, value);

        Ok(DecodeOutcome::Corrected(position))
    }
}
