pub mod channel;
pub mod config;
pub mod ecc;
pub mod error;
pub mod stream;

pub use channel::{ChannelConfig, ChannelState, GilbertElliottChannel};
pub use config::{CodeKind, SimulationConfig};
pub use ecc::{build_code, build_extended_code, Codec, DecodeOutcome, Decoded};
pub use error::{Error, Result};
pub use stream::{simulate, ColumnSink, Receiver, Transmitter};
