//! Error correction codes.
//!
//! This module provides binary Hamming codes built from a size parameter `m`:
//! - [`HammingCode`]: the `[2^m - 1, 2^m - 1 - m]` code, correcting any single
//!   bit error through an integer syndrome lookup
//! - [`ExtendedHammingCode`]: the same code plus an overall parity bit, correcting
//!   single errors and detecting double errors (SEC-DED)
//!
//! Both codes are systematic: the source word occupies the leading `k` bits of
//! every codeword.
//!
//! # Examples
//!
//! ```
//! use bitvec::prelude::*;
//! use hamming_fec::ecc::{build_code, Codec, DecodeOutcome};
//!
//! let code = build_code(3).unwrap();
//! let mut word = code.encode(bits![1, 0, 1, 1]).unwrap();
//! assert_eq!(word, bitvec![1, 0, 1, 1, 0, 1, 0]);
//!
//! let bit = word[5];
//! word.set(5, !bit);
//! let decoded = code.decode(&word).unwrap();
//! assert_eq!(decoded.source, bitvec![1, 0, 1, 1]);
//! assert_eq!(decoded.outcome, DecodeOutcome::Corrected(5));
//! ```

use crate::error::{Error, Result};
use bitvec::prelude::*;

pub mod construction;
pub mod extended;
pub mod hamming;
pub mod matrix;

pub use construction::{CodeMatrices, MAX_SIZE_PARAMETER, MIN_SIZE_PARAMETER};
pub use extended::ExtendedHammingCode;
pub use hamming::HammingCode;
pub use matrix::{render_word, BitMatrix};

/// What the decoder did to a received word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeOutcome {
    /// Zero syndrome, word accepted as received
    Clean,
    /// The bit at this codeword position was flipped back
    Corrected(usize),
    /// The syndrome matches no single-bit error; word left as received
    Uncorrectable,
}

/// A decoded source word together with the decoder's verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub source: BitVec,
    pub outcome: DecodeOutcome,
}

/// Common interface of the block codes in this module
pub trait Codec {
    /// Codeword length in bits
    fn total_length(&self) -> usize;

    /// Source word length in bits
    fn data_length(&self) -> usize;

    /// Encode a `data_length()`-bit source word into a codeword
    fn encode(&self, source: &BitSlice) -> Result<BitVec>;

    /// Correct a received word in place and report what was done
    fn correct(&self, word: &mut BitSlice) -> Result<DecodeOutcome>;

    /// Decode a received word, leaving the caller's buffer untouched
    fn decode(&self, word: &BitSlice) -> Result<Decoded> {
        Error::check_len("codeword", self.total_length(), word.len())?;

        let mut corrected = word.to_bitvec();
        let outcome = self.correct(&mut corrected)?;
        corrected.truncate(self.data_length());
        Ok(Decoded {
            source: corrected,
            outcome,
        })
    }
}

/// Builds the Hamming code with size parameter `m`
pub fn build_code(size_parameter: usize) -> Result<HammingCode> {
    HammingCode::new(size_parameter)
}

/// Builds the extended (SEC-DED) Hamming code with size parameter `m`
pub fn build_extended_code(size_parameter: usize) -> Result<ExtendedHammingCode> {
    ExtendedHammingCode::new(size_parameter)
}
