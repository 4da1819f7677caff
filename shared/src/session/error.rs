use livelink_serde::WriterConfigError;
use thiserror::Error;

use crate::{
    connection::error::EncoderError,
    protocol::{opcode::Opcode, ProtocolError},
    world::{entity::error::IntegrityError, error::MirrorWorldError},
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiveLinkError {
    /// The session was configured with values it cannot run with
    #[error("Invalid session config: {0}")]
    InvalidConfig(#[from] WriterConfigError),

    /// The authoring world failed duplicate-id validation and was not diffed
    #[error("World failed validation: {0}")]
    Integrity(#[from] IntegrityError),

    /// The remote process speaks a different protocol version
    #[error("Remote speaks protocol version {actual}, expected {expected}")]
    ProtocolVersionMismatch { expected: u32, actual: u32 },

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Failed to encode frame: {0}")]
    Encoder(#[from] EncoderError),

    /// A received change-set does not fit the mirrored world
    #[error("Change-set could not be applied: {0}")]
    MirrorWorld(#[from] MirrorWorldError),

    /// A message arrived at the side that never receives it
    #[error("Received a {opcode:?} message, which this side does not handle")]
    UnexpectedMessage { opcode: Opcode },
}
