//! Interleaving transmitter.
//!
//! Generates `d` random source words, encodes them into the rows of a `d × n`
//! table and sends the table column by column: column `c` carries bit `c` of
//! every codeword. The channel state advances once per column, so a bad stretch
//! of the channel spreads its errors over different codewords instead of piling
//! them into one.

use crate::channel::{ChannelStats, GilbertElliottChannel};
use crate::ecc::matrix::BitMatrix;
use crate::ecc::Codec;
use crate::error::{Error, Result};
use crate::stream::ColumnSink;
use bitvec::prelude::*;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::rc::Rc;

/// What one call to [`Transmitter::run`] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionReport {
    /// The generated source words, one per table row
    pub sources: Vec<BitVec>,
    /// The encoded table as it was before the channel
    pub sent: BitMatrix,
    /// Channel counters after the run
    pub channel: ChannelStats,
}

/// Encodes random words and sends them column-interleaved through a channel
#[derive(Debug)]
pub struct Transmitter<C: Codec + ?Sized, S: ColumnSink> {
    codec: Rc<C>,
    channel: GilbertElliottChannel,
    sink: S,
    table: BitMatrix,
    column: BitVec,
    rng: ChaCha20Rng,
}

impl<C: Codec + ?Sized, S: ColumnSink> Transmitter<C, S> {
    /// Create a transmitter whose source words are drawn from system entropy
    pub fn new(
        depth: usize,
        codec: Rc<C>,
        channel: GilbertElliottChannel,
        sink: S,
    ) -> Result<Self> {
        Self::with_rng(depth, codec, channel, sink, ChaCha20Rng::from_entropy())
    }

    /// Create a transmitter with a fixed seed for the source words
    pub fn with_seed(
        depth: usize,
        codec: Rc<C>,
        channel: GilbertElliottChannel,
        sink: S,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(depth, codec, channel, sink, ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(
        depth: usize,
        codec: Rc<C>,
        channel: GilbertElliottChannel,
        sink: S,
        rng: ChaCha20Rng,
    ) -> Result<Self> {
        if depth < 1 {
            return Err(Error::InvalidInput(
                "Interleaving depth must be at least 1".to_string(),
            ));
        }
        let table = BitMatrix::zeros(depth, codec.total_length());
        Ok(Transmitter {
            codec,
            channel,
            sink,
            table,
            column: BitVec::repeat(false, depth),
            rng,
        })
    }

    /// Number of interleaved codewords `d`
    pub fn depth(&self) -> usize {
        self.table.rows()
    }

    /// The channel, including its current state and counters
    pub fn channel(&self) -> &GilbertElliottChannel {
        &self.channel
    }

    /// The sink columns are delivered to
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutable access to the sink, e.g. to reset a receiver between runs
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Give up the transmitter and keep the sink
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Generate, encode and transmit one table of `d` codewords.
    ///
    /// Fails without drawing any bits or touching the channel when the sink
    /// cannot take a whole table, e.g. a [`Receiver`](crate::stream::Receiver)
    /// that still holds the previous run.
    pub fn run(&mut self) -> Result<TransmissionReport> {
        self.sink.ready()?;
        let sources = self.fill_table()?;

        for col in 0..self.table.cols() {
            for row in 0..self.depth() {
                let bit = self.channel.transmit_bit(self.table.get(row, col));
                self.column.set(row, bit);
            }
            self.sink.receive(&self.column)?;
            self.channel.step_state();
        }

        let stats = self.channel.stats();
        info!(
            "sent {} columns of depth {}, {} bits flipped, {} bad steps",
            self.table.cols(),
            self.depth(),
            stats.bits_flipped,
            stats.bad_steps
        );

        Ok(TransmissionReport {
            sources,
            sent: self.table.clone(),
            channel: stats,
        })
    }

    fn fill_table(&mut self) -> Result<Vec<BitVec>> {
        let data_length = self.codec.data_length();
        let mut sources = Vec::with_capacity(self.depth());

        for row in 0..self.depth() {
            let source: BitVec = (0..data_length).map(|_| self.rng.gen::<bool>()).collect();
            let encoded = self.codec.encode(&source)?;
            Error::check_len("codeword", self.table.cols(), encoded.len())?;
            self.table.row_mut(row).copy_from_bitslice(&encoded);
            sources.push(source);
        }

        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelConfig;
    use crate::ecc::{DecodeOutcome, ExtendedHammingCode, HammingCode};
    use crate::stream::Receiver;

    /// Records every column it is handed
    #[derive(Debug, Default)]
    struct Recorder {
        columns: Vec<BitVec>,
    }

    impl ColumnSink for Recorder {
        fn receive(&mut self, column: &BitSlice) -> Result<()> {
            self.columns.push(column.to_bitvec());
            Ok(())
        }
    }

    fn noiseless() -> GilbertElliottChannel {
        GilbertElliottChannel::with_seed(ChannelConfig::noiseless(), 0).unwrap()
    }

    #[test]
    fn test_rejects_zero_depth() {
        let codec = Rc::new(HammingCode::new(3).unwrap());
        let result = Transmitter::with_seed(0, codec, noiseless(), Recorder::default(), 1);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_columns_are_interleaved() {
        let codec = Rc::new(HammingCode::new(3).unwrap());
        let mut transmitter =
            Transmitter::with_seed(5, codec.clone(), noiseless(), Recorder::default(), 42)
                .unwrap();
        let report = transmitter.run().unwrap();

        assert_eq!(report.sources.len(), 5);
        let columns = &transmitter.sink().columns;
        assert_eq!(columns.len(), 7);
        for (col, column) in columns.iter().enumerate() {
            assert_eq!(column.len(), 5);
            for row in 0..5 {
                assert_eq!(column[row], report.sent.get(row, col));
            }
        }
        for (row, source) in report.sources.iter().enumerate() {
            assert_eq!(report.sent.row(row), codec.encode(source).unwrap().as_bitslice());
        }
        assert_eq!(report.channel.steps, 7);
        assert_eq!(report.channel.bits_sent, 35);
    }

    #[test]
    fn test_good_channel_delivers_every_word() {
        for m in 2..=5 {
            let codec = Rc::new(HammingCode::new(m).unwrap());
            let receiver = Receiver::new(8, codec.clone()).unwrap();
            let mut transmitter =
                Transmitter::with_seed(8, codec, noiseless(), receiver, m as u64).unwrap();

            let report = transmitter.run().unwrap();
            let decoded = transmitter.sink().decode().unwrap();

            assert_eq!(report.channel.bits_flipped, 0);
            for (decoded, source) in decoded.iter().zip(report.sources.iter()) {
                assert_eq!(&decoded.source, source);
                assert_eq!(decoded.outcome, DecodeOutcome::Clean);
            }
        }
    }

    #[test]
    fn test_bursty_channel_errors_within_capability_are_corrected() {
        let config = ChannelConfig {
            prob_of_error: 0.5,
            prob_good_to_bad: 0.05,
            prob_bad_to_good: 0.9,
        };
        for seed in 0..50u64 {
            let codec = Rc::new(ExtendedHammingCode::new(3).unwrap());
            let channel = GilbertElliottChannel::with_seed(config, seed).unwrap();
            let receiver = Receiver::new(6, codec.clone()).unwrap();
            let mut transmitter =
                Transmitter::with_seed(6, codec, channel, receiver, seed + 1000).unwrap();

            let report = transmitter.run().unwrap();
            let receiver = transmitter.into_sink();
            let decoded = receiver.decode().unwrap();

            for row in 0..6 {
                let errors = report
                    .sent
                    .row(row)
                    .iter()
                    .by_vals()
                    .zip(receiver.table().row(row).iter().by_vals())
                    .filter(|(a, b)| a != b)
                    .count();
                match errors {
                    0 | 1 => assert_eq!(decoded[row].source, report.sources[row]),
                    2 => assert_eq!(decoded[row].outcome, DecodeOutcome::Uncorrectable),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_repeated_runs_need_a_reset_receiver() {
        let codec = Rc::new(HammingCode::new(3).unwrap());
        let receiver = Receiver::new(4, codec.clone()).unwrap();
        let mut transmitter =
            Transmitter::with_seed(4, codec.clone(), noiseless(), receiver, 8).unwrap();

        let first = transmitter.run().unwrap();
        let stats = transmitter.channel().stats();
        let table = transmitter.sink().table().clone();
        assert_eq!(stats.bits_sent, 28);

        assert_eq!(
            transmitter.run(),
            Err(Error::TableInUse { received: 7 })
        );
        assert_eq!(transmitter.channel().stats(), stats);
        assert_eq!(transmitter.sink().table(), &table);

        // the rejected run drew nothing, so the next run matches a fresh
        // transmitter's second run
        transmitter.sink_mut().reset();
        let second = transmitter.run().unwrap();
        assert_eq!(transmitter.channel().stats().bits_sent, 56);

        let mut fresh =
            Transmitter::with_seed(4, codec.clone(), noiseless(), Recorder::default(), 8).unwrap();
        assert_eq!(fresh.run().unwrap().sources, first.sources);
        assert_eq!(fresh.run().unwrap().sources, second.sources);

        let decoded = transmitter.sink().decode().unwrap();
        for (decoded, source) in decoded.iter().zip(second.sources.iter()) {
            assert_eq!(&decoded.source, source);
        }
    }

    #[test]
    fn test_same_seeds_same_run() {
        let config = ChannelConfig {
            prob_of_error: 0.5,
            prob_good_to_bad: 0.3,
            prob_bad_to_good: 0.3,
        };
        let run = || {
            let codec = Rc::new(HammingCode::new(4).unwrap());
            let channel = GilbertElliottChannel::with_seed(config, 17).unwrap();
            let mut transmitter =
                Transmitter::with_seed(4, codec, channel, Recorder::default(), 18).unwrap();
            let report = transmitter.run().unwrap();
            (report, transmitter.into_sink().columns)
        };
        assert_eq!(run(), run());
    }
}
