use thiserror::Error;

/// Errors produced while building codes, encoding, decoding or running a transmission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A configuration value is outside its allowed range
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A bit vector does not have the length the code or table requires
    #[error("dimension mismatch for {what}: expected {expected} bits, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The receiver was asked to decode before every column arrived
    #[error("interleaving table incomplete: received {received} of {expected} columns")]
    IncompleteTable { received: usize, expected: usize },

    /// A column arrived after the table was already full
    #[error("interleaving table already holds all {columns} columns")]
    TableFull { columns: usize },

    /// A transmission was started into a table that already holds columns
    #[error("interleaving table already holds {received} columns; reset it before the next run")]
    TableInUse { received: usize },
}

impl Error {
    pub(crate) fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                what,
                expected,
                actual,
            })
        }
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
