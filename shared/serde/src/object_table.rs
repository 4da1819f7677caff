use std::{
    any::{type_name, Any},
    collections::HashMap,
    fmt,
    sync::Arc,
};

use crate::error::SerdeErr;

/// Side-table of reference-like values collected during one serialize pass.
///
/// Entries are keyed by the address of the `Arc` they were registered with, so the
/// same shared value appearing several times in a payload occupies a single entry.
/// Cloning the table clones the `Arc`s, which yields an equivalent table that
/// resolves every index to the same values.
#[derive(Clone, Default)]
pub struct ObjectTable {
    entries: Vec<Arc<dyn Any + Send + Sync>>,
    indices: HashMap<usize, u32>,
}

impl ObjectTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Any + Send + Sync>(&mut self, value: &Arc<T>) -> u32 {
        let address = Arc::as_ptr(value) as *const () as usize;
        if let Some(index) = self.indices.get(&address) {
            return *index;
        }

        debug_assert!(self.entries.len() < u32::MAX as usize);
        let index = self.entries.len() as u32;
        let entry: Arc<dyn Any + Send + Sync> = value.clone();
        self.entries.push(entry);
        self.indices.insert(address, index);
        index
    }

    pub fn get<T: Any + Send + Sync>(&self, index: u32) -> Result<Arc<T>, SerdeErr> {
        let entry = self
            .entries
            .get(index as usize)
            .ok_or(SerdeErr::ObjectIndexOutOfRange {
                index,
                len: self.entries.len(),
            })?;
        entry
            .clone()
            .downcast::<T>()
            .map_err(|_| SerdeErr::ObjectTypeMismatch {
                index,
                expected: type_name::<T>(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ObjectTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectTable")
            .field("len", &self.entries.len())
            .finish()
    }
}
