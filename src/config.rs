//! Simulation parameters.

use crate::channel::{check_probability, ChannelConfig};
use crate::ecc::construction::{MAX_SIZE_PARAMETER, MIN_SIZE_PARAMETER};
use crate::error::{Error, Result};

/// Which code the simulation encodes with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// Plain Hamming code, single error correction
    Standard,
    /// Extended Hamming code, single error correction and double error detection
    Extended,
}

/// Full parameter set of one transmission run. Every field is required.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Number of check bits `m` of the base Hamming code
    pub size_parameter: usize,
    /// Number of codewords interleaved together
    pub interleaving_depth: usize,
    /// Probability that a bit sent in the bad state is flipped
    pub prob_of_error: f64,
    /// Per-column probability of moving from good to bad
    pub prob_good_to_bad: f64,
    /// Per-column probability of moving from bad to good
    pub prob_bad_to_good: f64,
    /// Code used for every word
    pub code: CodeKind,
}

impl SimulationConfig {
    /// Checks every field against its allowed range
    pub fn validate(&self) -> Result<()> {
        if !(MIN_SIZE_PARAMETER..=MAX_SIZE_PARAMETER).contains(&self.size_parameter) {
            return Err(Error::InvalidInput(format!(
                "size_parameter must be in [{}, {}], got {}",
                MIN_SIZE_PARAMETER, MAX_SIZE_PARAMETER, self.size_parameter
            )));
        }
        if self.interleaving_depth < 1 {
            return Err(Error::InvalidInput(
                "interleaving_depth must be at least 1".to_string(),
            ));
        }
        check_probability("prob_of_error", self.prob_of_error)?;
        check_probability("prob_good_to_bad", self.prob_good_to_bad)?;
        check_probability("prob_bad_to_good", self.prob_bad_to_good)
    }

    /// The channel part of the configuration
    pub fn channel(&self) -> ChannelConfig {
        ChannelConfig {
            prob_of_error: self.prob_of_error,
            prob_good_to_bad: self.prob_good_to_bad,
            prob_bad_to_good: self.prob_bad_to_good,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SimulationConfig {
        SimulationConfig {
            size_parameter: 3,
            interleaving_depth: 4,
            prob_of_error: 0.5,
            prob_good_to_bad: 0.1,
            prob_bad_to_good: 0.4,
            code: CodeKind::Standard,
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(valid().validate().is_ok());
        let channel = valid().channel();
        assert_eq!(channel.prob_of_error, 0.5);
        assert_eq!(channel.prob_good_to_bad, 0.1);
        assert_eq!(channel.prob_bad_to_good, 0.4);
    }

    #[test]
    fn test_size_parameter_bounds() {
        let largest = SimulationConfig {
            size_parameter: MAX_SIZE_PARAMETER,
            ..valid()
        };
        assert!(largest.validate().is_ok());

        let too_large = SimulationConfig {
            size_parameter: MAX_SIZE_PARAMETER + 1,
            ..valid()
        };
        assert!(matches!(too_large.validate(), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_fields() {
        let cases = [
            SimulationConfig {
                size_parameter: 1,
                ..valid()
            },
            SimulationConfig {
                interleaving_depth: 0,
                ..valid()
            },
            SimulationConfig {
                prob_of_error: 1.01,
                ..valid()
            },
            SimulationConfig {
                prob_good_to_bad: -0.5,
                ..valid()
            },
            SimulationConfig {
                prob_bad_to_good: f64::NAN,
                ..valid()
            },
        ];
        for config in cases {
            assert!(matches!(config.validate(), Err(Error::InvalidInput(_))));
        }
    }
}
