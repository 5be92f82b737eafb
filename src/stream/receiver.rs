//! Deinterleaving receiver.
//!
//! Columns arrive one at a time and are written into a fixed `d × n` table.
//! Once all `n` columns are present every row is a complete (possibly
//! corrupted) codeword and is decoded independently.

use crate::ecc::matrix::BitMatrix;
use crate::ecc::{Codec, Decoded};
use crate::error::{Error, Result};
use crate::stream::ColumnSink;
use bitvec::prelude::*;
use std::rc::Rc;

/// Buffers interleaved columns and decodes the reconstructed codewords
#[derive(Debug)]
pub struct Receiver<C: Codec + ?Sized> {
    codec: Rc<C>,
    table: BitMatrix,
    columns_received: usize,
}

impl<C: Codec + ?Sized> Receiver<C> {
    /// Creates a receiver for `depth` interleaved codewords of `codec`
    pub fn new(depth: usize, codec: Rc<C>) -> Result<Self> {
        if depth < 1 {
            return Err(Error::InvalidInput(
                "Interleaving depth must be at least 1".to_string(),
            ));
        }
        let table = BitMatrix::zeros(depth, codec.total_length());
        Ok(Receiver {
            codec,
            table,
            columns_received: 0,
        })
    }

    /// Number of interleaved codewords `d`
    pub fn depth(&self) -> usize {
        self.table.rows()
    }

    /// Number of columns received so far
    pub fn columns_received(&self) -> usize {
        self.columns_received
    }

    /// True once all `n` columns are in
    pub fn is_complete(&self) -> bool {
        self.columns_received == self.table.cols()
    }

    /// The received table; rows are codewords as they came off the channel
    pub fn table(&self) -> &BitMatrix {
        &self.table
    }

    /// Store the next column
    pub fn receive(&mut self, column: &BitSlice) -> Result<()> {
        Error::check_len("column", self.depth(), column.len())?;
        if self.is_complete() {
            return Err(Error::TableFull {
                columns: self.table.cols(),
            });
        }

        let col = self.columns_received;
        for (row, bit) in column.iter().by_vals().enumerate() {
            self.table.set(row, col, bit);
        }
        self.columns_received += 1;
        Ok(())
    }

    /// Decode every row of a complete table
    pub fn decode(&self) -> Result<Vec<Decoded>> {
        if !self.is_complete() {
            return Err(Error::IncompleteTable {
                received: self.columns_received,
                expected: self.table.cols(),
            });
        }

        self.table
            .iter_rows()
            .map(|word| self.codec.decode(word))
            .collect()
    }

    /// Forget all received columns so the receiver can take another table
    pub fn reset(&mut self) {
        self.table = BitMatrix::zeros(self.depth(), self.table.cols());
        self.columns_received = 0;
    }
}

impl<C: Codec + ?Sized> ColumnSink for Receiver<C> {
    fn receive(&mut self, column: &BitSlice) -> Result<()> {
        Receiver::receive(self, column)
    }

    fn ready(&self) -> Result<()> {
        if self.columns_received == 0 {
            Ok(())
        } else {
            Err(Error::TableInUse {
                received: self.columns_received,
            })
        }
    }
}
