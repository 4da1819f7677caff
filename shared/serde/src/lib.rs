//! # Livelink Serde
//! Byte-level serialization used by the livelink protocol.
//!
//! Values are written into an append-only [`BufferWriter`]. Values that cannot be
//! flattened by value travel as [`ObjectRef`]s: the writer registers them in an
//! [`ObjectTable`] and inlines only the table index. The table must accompany the
//! bytes for a [`BufferReader`] to resolve those indices again.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod buffer_reader;
mod buffer_writer;
mod error;
mod impls;
mod object_ref;
mod object_table;
mod serde;

pub use buffer_reader::BufferReader;
pub use buffer_writer::{BufferWriter, WriterConfig, DEFAULT_ALIGNMENT, DEFAULT_CAPACITY};
pub use error::{SerdeErr, WriterConfigError};
pub use object_ref::ObjectRef;
pub use object_table::ObjectTable;
pub use serde::{deserialize, serialize, serialize_with, ConstByteLength, Serde};
