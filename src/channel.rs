//! Two-state burst channel (Gilbert-Elliott model).
//!
//! The channel is either `Good` (bits pass unchanged) or `Bad` (each bit is
//! flipped with probability `prob_of_error`). Between transmission units the
//! state evolves as a discrete-time Markov chain:
//!
//! ```text
//!          prob_good_to_bad
//!   Good ------------------> Bad
//!        <------------------
//!          prob_bad_to_good
//! ```
//!
//! Long stays in `Bad` produce bursts of corrupted bits. All randomness comes
//! from an owned, seedable [`ChaCha20Rng`].

use crate::error::{Error, Result};
use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Channel parameters; all three probabilities must lie in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelConfig {
    /// Probability that a bit sent in the bad state is flipped
    pub prob_of_error: f64,
    /// Per-step probability of moving from good to bad
    pub prob_good_to_bad: f64,
    /// Per-step probability of moving from bad to good
    pub prob_bad_to_good: f64,
}

impl ChannelConfig {
    /// A channel that never leaves the good state
    pub fn noiseless() -> Self {
        ChannelConfig {
            prob_of_error: 0.0,
            prob_good_to_bad: 0.0,
            prob_bad_to_good: 1.0,
        }
    }

    /// Checks every probability
    pub fn validate(&self) -> Result<()> {
        check_probability("prob_of_error", self.prob_of_error)?;
        check_probability("prob_good_to_bad", self.prob_good_to_bad)?;
        check_probability("prob_bad_to_good", self.prob_bad_to_good)
    }
}

pub(crate) fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )))
    }
}

/// State of the two-state channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelState {
    #[default]
    Good,
    Bad,
}

/// Counters collected while the channel is in use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelStats {
    /// Bits passed through `transmit_bit`
    pub bits_sent: usize,
    /// Bits that came out flipped
    pub bits_flipped: usize,
    /// Calls to `step_state`
    pub steps: usize,
    /// Steps that started in the bad state
    pub bad_steps: usize,
}

/// Gilbert-Elliott two-state channel
#[derive(Debug, Clone)]
pub struct GilbertElliottChannel {
    config: ChannelConfig,
    state: ChannelState,
    stats: ChannelStats,
    rng: ChaCha20Rng,
}

impl GilbertElliottChannel {
    /// Create a channel seeded from system entropy, starting in the good state
    pub fn new(config: ChannelConfig) -> Result<Self> {
        Self::with_rng(config, ChaCha20Rng::from_entropy())
    }

    /// Create a channel with a fixed seed for reproducible runs
    pub fn with_seed(config: ChannelConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, ChaCha20Rng::seed_from_u64(seed))
    }

    /// Create a channel driven by the given generator
    pub fn with_rng(config: ChannelConfig, rng: ChaCha20Rng) -> Result<Self> {
        config.validate()?;
        Ok(GilbertElliottChannel {
            config,
            state: ChannelState::Good,
            stats: ChannelStats::default(),
            rng,
        })
    }

    /// Current state
    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Counters since creation or the last `reset`
    pub fn stats(&self) -> ChannelStats {
        self.stats
    }

    /// The parameters this channel was built with
    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Send one bit through the channel in its current state
    pub fn transmit_bit(&mut self, bit: bool) -> bool {
        self.stats.bits_sent += 1;
        match self.state {
            ChannelState::Good => bit,
            ChannelState::Bad => {
                let draw: f64 = self.rng.gen();
                if draw < self.config.prob_of_error {
                    self.stats.bits_flipped += 1;
                    !bit
                } else {
                    bit
                }
            }
        }
    }

    /// Advance the Markov chain by one step; called once per transmitted unit
    pub fn step_state(&mut self) -> ChannelState {
        self.stats.steps += 1;
        let draw: f64 = self.rng.gen();
        let next = match self.state {
            ChannelState::Good if draw < self.config.prob_good_to_bad => ChannelState::Bad,
            ChannelState::Bad => {
                self.stats.bad_steps += 1;
                if draw < self.config.prob_bad_to_good {
                    ChannelState::Good
                } else {
                    ChannelState::Bad
                }
            }
            state => state,
        };

        if next != self.state {
            trace!("channel {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    /// Return to the good state and clear the counters; the generator keeps its position
    pub fn reset(&mut self) {
        self.state = ChannelState::Good;
        self.stats = ChannelStats::default();
    }
}
