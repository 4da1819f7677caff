use thiserror::Error;

/// Errors raised while decoding a payload. Every variant means the message is
/// corrupt or was paired with the wrong [`ObjectTable`](crate::ObjectTable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// A read ran past the end of the buffer
    #[error("Attempted to read {requested} bytes at offset {offset} but only {remaining} remain. The payload is truncated or corrupt")]
    UnexpectedEnd {
        offset: usize,
        requested: usize,
        remaining: usize,
    },

    /// The payload was fully decoded but bytes were left over
    #[error("Payload decoded with {remaining} trailing bytes left unread")]
    TrailingBytes { remaining: usize },

    /// An object index points past the end of the object table
    #[error("Object table index {index} has no entry (table holds {len} objects). The payload must be read with the table it was written with")]
    ObjectIndexOutOfRange { index: u32, len: usize },

    /// An object table entry holds a different type than the payload expects
    #[error("Object table entry {index} does not hold a value of type {expected}")]
    ObjectTypeMismatch { index: u32, expected: &'static str },

    /// A tag or flag byte had a value outside its encoding
    #[error("Invalid encoding for {type_name}: unexpected value {value}")]
    InvalidValue { type_name: &'static str, value: u64 },

    /// A string payload was not valid UTF-8
    #[error("String payload of {len} bytes is not valid UTF-8")]
    InvalidUtf8 { len: usize },
}

/// Errors raised when a [`WriterConfig`](crate::WriterConfig) cannot size a buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriterConfigError {
    /// Allocations are rounded with a bit mask, which needs a power of two
    #[error("BufferWriter alignment must be a power of two, got {alignment}")]
    AlignmentNotPowerOfTwo { alignment: usize },
}
