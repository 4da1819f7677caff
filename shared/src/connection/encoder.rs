cfg_if! {
    if #[cfg(feature = "zstd_support")]
    {
        use log::debug;
        use zstd::bulk::Compressor;

        use super::compression_config::{CompressionConfig, CompressionMode};
        use super::error::EncoderError;

        pub struct Encoder {
            result: Vec<u8>,
            compressor: Option<Compressor<'static>>,
        }

        impl Encoder {
            /// Try to create a new Encoder. Without a config, bytes pass through unchanged.
            pub fn try_new(config: Option<&CompressionConfig>) -> Result<Self, EncoderError> {
                let compressor = match config.map(|config| &config.mode) {
                    None => None,
                    Some(CompressionMode::Default(level)) => Some(
                        Compressor::new(*level)
                            .map_err(|_| EncoderError::CompressorCreationFailed { level: *level })?,
                    ),
                    Some(CompressionMode::Dictionary(level, dictionary)) => Some(
                        Compressor::with_dictionary(*level, dictionary).map_err(|_| {
                            EncoderError::CompressorWithDictionaryFailed { level: *level }
                        })?,
                    ),
                };

                Ok(Self {
                    result: Vec::new(),
                    compressor,
                })
            }

            /// Try to encode a payload, returning error on compression failure
            pub fn try_encode(&mut self, payload: &[u8]) -> Result<&[u8], EncoderError> {
                match &mut self.compressor {
                    Some(compressor) => {
                        self.result = compressor.compress(payload).map_err(|_| {
                            EncoderError::CompressionFailed {
                                payload_size: payload.len(),
                            }
                        })?;
                        debug!(
                            "Encoder: compressed {} bytes to {}",
                            payload.len(),
                            self.result.len()
                        );
                    }
                    None => self.result = payload.to_vec(),
                }
                Ok(&self.result)
            }

            /// # Panics
            /// Panics if the compressor cannot be created with the given configuration
            pub fn new(config: Option<&CompressionConfig>) -> Self {
                Self::try_new(config).expect("Failed to create Encoder")
            }

            /// # Panics
            /// Panics if compression fails
            pub fn encode(&mut self, payload: &[u8]) -> &[u8] {
                self.try_encode(payload).expect("Failed to encode payload")
            }
        }
    }
    else
    {
        use super::compression_config::CompressionConfig;
        use super::error::EncoderError;

        pub struct Encoder {
            result: Vec<u8>,
        }

        impl Encoder {
            pub fn try_new(_: Option<&CompressionConfig>) -> Result<Self, EncoderError> {
                Ok(Self { result: Vec::new() })
            }

            pub fn try_encode(&mut self, payload: &[u8]) -> Result<&[u8], EncoderError> {
                self.result = payload.to_vec();
                Ok(&self.result)
            }

            /// # Panics
            /// Panics if the compressor cannot be created with the given configuration
            pub fn new(config: Option<&CompressionConfig>) -> Self {
                Self::try_new(config).expect("Failed to create Encoder")
            }

            /// # Panics
            /// Panics if compression fails
            pub fn encode(&mut self, payload: &[u8]) -> &[u8] {
                self.try_encode(payload).expect("Failed to encode payload")
            }
        }
    }
}
