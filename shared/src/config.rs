use livelink_serde::WriterConfig;

use crate::{connection::compression_config::CompressionConfig, protocol::PROTOCOL_VERSION};

/// Contains config properties shared by the authoring and remote sessions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveLinkConfig {
    /// Buffer sizing used when encoding message payloads. Every payload buffer
    /// reserves at least `initial_capacity` bytes, more if the message needs it.
    /// `alignment` must be a power of two or the sessions refuse the config.
    pub writer: WriterConfig,
    /// Check for duplicate stable ids before every diff. A world with
    /// duplicates is never diffed.
    pub validate_ids: bool,
    /// Compression applied to encoded frame bytes. Ignored unless the
    /// `zstd_support` feature is enabled.
    pub compression: Option<CompressionConfig>,
    /// Version sent in, and expected from, `Connect` messages
    pub protocol_version: u32,
}

impl LiveLinkConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writer(mut self, writer: WriterConfig) -> Self {
        self.writer = writer;
        self
    }

    pub fn validate_ids(mut self, validate_ids: bool) -> Self {
        self.validate_ids = validate_ids;
        self
    }

    pub fn compression(mut self, compression: CompressionConfig) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn protocol_version(mut self, protocol_version: u32) -> Self {
        self.protocol_version = protocol_version;
        self
    }
}

impl Default for LiveLinkConfig {
    fn default() -> Self {
        Self {
            writer: WriterConfig::default(),
            validate_ids: true,
            compression: None,
            protocol_version: PROTOCOL_VERSION,
        }
    }
}
