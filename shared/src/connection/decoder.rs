cfg_if! {
    if #[cfg(feature = "zstd_support")]
    {
        use zstd::bulk::Decompressor;

        use super::compression_config::{CompressionConfig, CompressionMode};
        use super::error::DecoderError;

        pub struct Decoder {
            result: Vec<u8>,
            decompressor: Option<Decompressor<'static>>,
        }

        impl Decoder {
            /// Try to create a new Decoder. Without a config, bytes pass through unchanged.
            pub fn try_new(config: Option<&CompressionConfig>) -> Result<Self, DecoderError> {
                let decompressor = match config.map(|config| &config.mode) {
                    None => None,
                    Some(CompressionMode::Default(_)) => Some(
                        Decompressor::new().map_err(|_| DecoderError::DecompressorCreationFailed)?,
                    ),
                    Some(CompressionMode::Dictionary(_, dictionary)) => Some(
                        Decompressor::with_dictionary(dictionary)
                            .map_err(|_| DecoderError::DecompressorWithDictionaryFailed)?,
                    ),
                };

                Ok(Self {
                    decompressor,
                    result: Vec::new(),
                })
            }

            /// Try to decode a payload, returning error on decompression failure.
            /// Received bytes are untrusted; malformed input is an error, never a panic.
            pub fn try_decode(&mut self, payload: &[u8]) -> Result<&[u8], DecoderError> {
                match &mut self.decompressor {
                    Some(decompressor) => {
                        let upper_bound = Decompressor::<'static>::upper_bound(payload)
                            .map_err(|_| DecoderError::UpperBoundCalculationFailed {
                                payload_size: payload.len(),
                            })?;

                        self.result = decompressor
                            .decompress(payload, upper_bound)
                            .map_err(|_| DecoderError::DecompressionFailed {
                                payload_size: payload.len(),
                            })?;
                    }
                    None => self.result = payload.to_vec(),
                }
                Ok(&self.result)
            }

            /// # Panics
            /// Panics if the decompressor cannot be created with the given configuration
            pub fn new(config: Option<&CompressionConfig>) -> Self {
                Self::try_new(config).expect("Failed to create Decoder")
            }

            /// # Panics
            /// Panics if decompression fails
            pub fn decode(&mut self, payload: &[u8]) -> &[u8] {
                self.try_decode(payload).expect("Failed to decode payload")
            }
        }
    }
    else
    {
        use super::compression_config::CompressionConfig;
        use super::error::DecoderError;

        pub struct Decoder {
            result: Vec<u8>,
        }

        impl Decoder {
            pub fn try_new(_: Option<&CompressionConfig>) -> Result<Self, DecoderError> {
                Ok(Self { result: Vec::new() })
            }

            pub fn try_decode(&mut self, payload: &[u8]) -> Result<&[u8], DecoderError> {
                self.result = payload.to_vec();
                Ok(&self.result)
            }

            /// # Panics
            /// Panics if the decompressor cannot be created with the given configuration
            pub fn new(config: Option<&CompressionConfig>) -> Self {
                Self::try_new(config).expect("Failed to create Decoder")
            }

            /// # Panics
            /// Panics if decompression fails
            pub fn decode(&mut self, payload: &[u8]) -> &[u8] {
                self.try_decode(payload).expect("Failed to decode payload")
            }
        }
    }
}
