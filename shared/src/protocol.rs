//! Message vocabulary and framing of the live synchronization protocol.
//!
//! Every unit on the wire is a [`MessageFrame`]: a 128-bit [`Opcode`] tag, a `u32`
//! payload length and the payload itself, all little-endian. The opcode alone
//! decides how the payload is read; see [`LiveMessage`].

pub mod asset_bundle;
pub mod connect;
pub mod error;
pub mod frame;
pub mod live_message;
pub mod opcode;

pub use error::ProtocolError;

/// Bumped whenever a payload schema or opcode tag changes
pub const PROTOCOL_VERSION: u32 = 1;
