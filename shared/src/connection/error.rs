use thiserror::Error;

/// Errors that can occur while compressing frame bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderError {
    /// Failed to create compressor with the specified configuration
    #[error("Failed to create compressor with compression level {level}")]
    CompressorCreationFailed { level: i32 },

    /// Failed to create compressor with dictionary
    #[error("Failed to create compressor with dictionary (compression level {level})")]
    CompressorWithDictionaryFailed { level: i32 },

    /// Compression operation failed
    #[error("Failed to compress payload of {payload_size} bytes")]
    CompressionFailed { payload_size: usize },
}

/// Errors that can occur while decompressing frame bytes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderError {
    /// Failed to create decompressor
    #[error("Failed to create decompressor")]
    DecompressorCreationFailed,

    /// Failed to create decompressor with dictionary
    #[error("Failed to create decompressor with dictionary")]
    DecompressorWithDictionaryFailed,

    /// Failed to calculate upper bound for decompression
    #[error("Failed to calculate upper bound for payload of {payload_size} bytes")]
    UpperBoundCalculationFailed { payload_size: usize },

    /// Decompression operation failed
    #[error("Failed to decompress payload of {payload_size} bytes (possibly malformed data)")]
    DecompressionFailed { payload_size: usize },
}
