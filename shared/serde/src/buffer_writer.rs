use std::{any::Any, sync::Arc};

use log::trace;

use crate::{error::WriterConfigError, object_table::ObjectTable};

pub const DEFAULT_CAPACITY: usize = 4096;
pub const DEFAULT_ALIGNMENT: usize = 16;

/// Sizing knobs for a [`BufferWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Capacity reserved up front. Rounded up to `alignment`.
    pub initial_capacity: usize,
    /// Granularity of every allocation. Must be a power of two.
    pub alignment: usize,
}

impl WriterConfig {
    pub fn validate(&self) -> Result<(), WriterConfigError> {
        if !self.alignment.is_power_of_two() {
            return Err(WriterConfigError::AlignmentNotPowerOfTwo {
                alignment: self.alignment,
            });
        }
        Ok(())
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            alignment: DEFAULT_ALIGNMENT,
        }
    }
}

/// An append-only byte buffer that grows as needed.
///
/// Writes only ever extend the buffer; bytes already written are never touched
/// again. When a write does not fit, the buffer is reallocated to at least twice its
/// capacity, rounded up to the configured alignment, and the old contents are copied
/// over. Reference-like values are collected in the writer's [`ObjectTable`], which
/// is handed back together with the bytes by [`BufferWriter::finish`].
pub struct BufferWriter {
    buffer: Vec<u8>,
    alignment: usize,
    objects: ObjectTable,
}

impl BufferWriter {
    pub fn new() -> Self {
        Self::from_config(&WriterConfig::default())
    }

    pub fn try_from_config(config: &WriterConfig) -> Result<Self, WriterConfigError> {
        config.validate()?;
        Ok(Self {
            buffer: Vec::with_capacity(align_up(config.initial_capacity, config.alignment)),
            alignment: config.alignment,
            objects: ObjectTable::new(),
        })
    }

    /// # Panics
    ///
    /// Panics if `config.alignment` is not a power of two.
    pub fn from_config(config: &WriterConfig) -> Self {
        Self::try_from_config(config).expect("BufferWriter alignment must be a power of two")
    }

    /// # Panics
    ///
    /// Panics if `alignment` is not a power of two.
    pub fn with_capacity(capacity: usize, alignment: usize) -> Self {
        Self::from_config(&WriterConfig {
            initial_capacity: capacity,
            alignment,
        })
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.reserve(1);
        self.buffer.push(byte);
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.reserve(bytes.len());
        self.buffer.extend_from_slice(bytes);
    }

    /// Registers `value` in the object table and returns its index. Registering the
    /// same `Arc` again returns the index it already has.
    pub fn register_object<T: Any + Send + Sync>(&mut self, value: &Arc<T>) -> u32 {
        self.objects.register(value)
    }

    pub fn bytes_written(&self) -> usize {
        self.buffer.len()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn alignment(&self) -> usize {
        self.alignment
    }

    pub fn objects(&self) -> &ObjectTable {
        &self.objects
    }

    /// Consumes the writer, yielding the written bytes and the object table that
    /// must accompany them.
    pub fn finish(self) -> (Vec<u8>, ObjectTable) {
        (self.buffer, self.objects)
    }

    fn reserve(&mut self, additional: usize) {
        let required = self.buffer.len() + additional;
        let capacity = self.buffer.capacity();
        if required <= capacity {
            return;
        }

        let new_capacity = align_up(required.max(capacity * 2), self.alignment);
        trace!(
            "BufferWriter: growing from {} to {} bytes",
            capacity,
            new_capacity
        );
        self.buffer.reserve_exact(new_capacity - self.buffer.len());
    }
}

impl Default for BufferWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn align_up(value: usize, alignment: usize) -> usize {
    (value + alignment - 1) & !(alignment - 1)
}
