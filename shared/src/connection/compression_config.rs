/// Configures compression of encoded frames. Only takes effect when the crate is
/// built with the `zstd_support` feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressionConfig {
    pub mode: CompressionMode,
}

impl CompressionConfig {
    pub fn new(mode: CompressionMode) -> Self {
        Self { mode }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompressionMode {
    /// Compression level
    Default(i32),
    /// Compression level and a dictionary trained on representative frames
    Dictionary(i32, Vec<u8>),
}
