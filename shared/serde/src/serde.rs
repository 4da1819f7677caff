use crate::{
    buffer_reader::BufferReader,
    buffer_writer::{BufferWriter, WriterConfig},
    error::SerdeErr,
    object_table::ObjectTable,
};

/// A type that can be written to a [`BufferWriter`] and read back from a
/// [`BufferReader`].
pub trait Serde: Sized {
    /// Append the value to the writer
    fn ser(&self, writer: &mut BufferWriter);

    /// Parse a value from the reader
    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr>;

    /// Number of bytes `ser` will append
    fn byte_length(&self) -> u32;
}

/// Implemented by types whose encoding always has the same size.
pub trait ConstByteLength {
    fn const_byte_length() -> u32;
}

/// Serializes `value` into a buffer sized for it, returning the bytes together with
/// the object table that must accompany them.
pub fn serialize<T: Serde>(value: &T) -> (Vec<u8>, ObjectTable) {
    let config = WriterConfig {
        initial_capacity: value.byte_length() as usize,
        ..WriterConfig::default()
    };
    serialize_with(value, &config)
}

pub fn serialize_with<T: Serde>(value: &T, config: &WriterConfig) -> (Vec<u8>, ObjectTable) {
    let mut writer = BufferWriter::from_config(config);
    value.ser(&mut writer);
    writer.finish()
}

/// Deserializes a value that must span the whole of `bytes`.
pub fn deserialize<T: Serde>(bytes: &[u8], objects: &ObjectTable) -> Result<T, SerdeErr> {
    let mut reader = BufferReader::new(bytes, objects);
    let value = T::de(&mut reader)?;
    if !reader.is_finished() {
        return Err(SerdeErr::TrailingBytes {
            remaining: reader.remaining(),
        });
    }
    Ok(value)
}
