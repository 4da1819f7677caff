use crate::{
    buffer_reader::BufferReader,
    buffer_writer::BufferWriter,
    error::SerdeErr,
    serde::{ConstByteLength, Serde},
};

// Numbers are little-endian regardless of platform

macro_rules! impl_serde_for_number {
    ($($t:ty),*) => {
        $(
            impl Serde for $t {
                fn ser(&self, writer: &mut BufferWriter) {
                    writer.write_bytes(&self.to_le_bytes());
                }

                fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
                    let bytes = reader.read_array::<{ std::mem::size_of::<$t>() }>()?;
                    Ok(<$t>::from_le_bytes(bytes))
                }

                fn byte_length(&self) -> u32 {
                    Self::const_byte_length()
                }
            }

            impl ConstByteLength for $t {
                fn const_byte_length() -> u32 {
                    std::mem::size_of::<$t>() as u32
                }
            }
        )*
    };
}

impl_serde_for_number!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128, f32, f64);

impl Serde for () {
    fn ser(&self, _: &mut BufferWriter) {}

    fn de(_: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok(())
    }

    fn byte_length(&self) -> u32 {
        0
    }
}

impl Serde for bool {
    fn ser(&self, writer: &mut BufferWriter) {
        writer.write_byte(u8::from(*self));
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        match reader.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            value => Err(SerdeErr::InvalidValue {
                type_name: "bool",
                value: u64::from(value),
            }),
        }
    }

    fn byte_length(&self) -> u32 {
        1
    }
}

impl ConstByteLength for bool {
    fn const_byte_length() -> u32 {
        1
    }
}

// Variable-length values carry an explicit u32 count, never a terminator

fn write_len(writer: &mut BufferWriter, len: usize) {
    match u32::try_from(len) {
        Ok(len) => len.ser(writer),
        Err(_) => panic!("Can't encode a length of {} in a u32 length prefix", len),
    }
}

impl Serde for String {
    fn ser(&self, writer: &mut BufferWriter) {
        write_len(writer, self.len());
        writer.write_bytes(self.as_bytes());
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        let len = u32::de(reader)? as usize;
        let bytes = reader.read_bytes(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| SerdeErr::InvalidUtf8 { len })
    }

    fn byte_length(&self) -> u32 {
        u32::const_byte_length() + self.len() as u32
    }
}

impl<T: Serde> Serde for Vec<T> {
    fn ser(&self, writer: &mut BufferWriter) {
        write_len(writer, self.len());
        for item in self {
            item.ser(writer);
        }
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        let len = u32::de(reader)? as usize;
        // a corrupt count must not turn into a huge allocation
        let mut output = Vec::with_capacity(len.min(reader.remaining()));
        for _ in 0..len {
            output.push(T::de(reader)?);
        }
        Ok(output)
    }

    fn byte_length(&self) -> u32 {
        let mut output = u32::const_byte_length();
        for item in self {
            output += item.byte_length();
        }
        output
    }
}

impl<T: Serde> Serde for Option<T> {
    fn ser(&self, writer: &mut BufferWriter) {
        match self {
            Some(value) => {
                true.ser(writer);
                value.ser(writer);
            }
            None => false.ser(writer),
        }
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        if bool::de(reader)? {
            Ok(Some(T::de(reader)?))
        } else {
            Ok(None)
        }
    }

    fn byte_length(&self) -> u32 {
        match self {
            Some(value) => 1 + value.byte_length(),
            None => 1,
        }
    }
}

impl<A: Serde, B: Serde> Serde for (A, B) {
    fn ser(&self, writer: &mut BufferWriter) {
        self.0.ser(writer);
        self.1.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        Ok((A::de(reader)?, B::de(reader)?))
    }

    fn byte_length(&self) -> u32 {
        self.0.byte_length() + self.1.byte_length()
    }
}
