use livelink_serde::SerdeErr;
use thiserror::Error;

use crate::connection::error::DecoderError;

use super::opcode::Opcode;

/// Errors that make a single frame unusable. The frame is discarded and the peers
/// are expected to resynchronize through a reset; none of these are fatal to the
/// process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The frame's opcode tag is not part of this protocol version
    #[error("Unknown opcode tag {tag:032x}. The peer may speak a different protocol version")]
    UnknownOpcode { tag: u128 },

    /// Fewer bytes than a frame header were received
    #[error("Frame header needs {expected} bytes but only {len} were received")]
    TruncatedHeader { len: usize, expected: usize },

    /// The header declares more payload than was received
    #[error("Frame declares a payload of {declared} bytes but only {available} are available")]
    PayloadLengthMismatch { declared: u32, available: usize },

    /// The payload does not fit the u32 length field of the header
    #[error("Payload of {len} bytes exceeds the largest encodable frame")]
    PayloadTooLarge { len: usize },

    /// Bytes were left over after a complete frame
    #[error("{remaining} unexpected bytes follow a complete frame")]
    TrailingBytes { remaining: usize },

    /// The payload does not decode as the opcode's schema
    #[error("Payload of {opcode:?} frame is corrupt: {error}")]
    InvalidPayload {
        opcode: Opcode,
        #[source]
        error: SerdeErr,
    },

    /// A frame of the wrong kind arrived where a specific one was required
    #[error("Expected a {expected:?} frame but received {actual:?}")]
    UnexpectedOpcode { expected: Opcode, actual: Opcode },

    /// The frame bytes could not be decompressed
    #[error("Frame bytes could not be decoded: {0}")]
    Decoder(#[from] DecoderError),
}
