use std::{any::Any, fmt, hash::Hash, ops::Deref, sync::Arc};

use crate::{
    buffer_reader::BufferReader, buffer_writer::BufferWriter, error::SerdeErr,
    serde::{ConstByteLength, Serde},
};

/// A shared, reference-like payload value.
///
/// On the wire an `ObjectRef` is only the `u32` index of its entry in the
/// [`ObjectTable`](crate::ObjectTable); the value itself never gets flattened into
/// the byte stream. Equality compares the referenced values, so a decoded
/// `ObjectRef` equals the one that was written as long as the tables agree.
pub struct ObjectRef<T: Any + Send + Sync>(Arc<T>);

impl<T: Any + Send + Sync> ObjectRef<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }

    pub fn from_arc(value: Arc<T>) -> Self {
        Self(value)
    }

    pub fn arc(&self) -> &Arc<T> {
        &self.0
    }

    /// Whether both refs point at the same allocation, not merely equal values.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Any + Send + Sync> Clone for ObjectRef<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: Any + Send + Sync> Deref for ObjectRef<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: Any + Send + Sync + PartialEq> PartialEq for ObjectRef<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: Any + Send + Sync + Eq> Eq for ObjectRef<T> {}

impl<T: Any + Send + Sync + Hash> Hash for ObjectRef<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T: Any + Send + Sync + fmt::Debug> fmt::Debug for ObjectRef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectRef").field(&self.0).finish()
    }
}

impl<T: Any + Send + Sync> Serde for ObjectRef<T> {
    fn ser(&self, writer: &mut BufferWriter) {
        let index = writer.register_object(&self.0);
        index.ser(writer);
    }

    fn de(reader: &mut BufferReader) -> Result<Self, SerdeErr> {
        let index = u32::de(reader)?;
        reader.object::<T>(index).map(ObjectRef)
    }

    fn byte_length(&self) -> u32 {
        Self::const_byte_length()
    }
}

impl<T: Any + Send + Sync> ConstByteLength for ObjectRef<T> {
    fn const_byte_length() -> u32 {
        u32::const_byte_length()
    }
}
