/// In-memory key-value backend with switchable failures, for tests.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::error::StorageError;

use super::KeyValueStore;

#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, Vec<u8>>>,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &[u8]) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_string(), value.to_vec());
        store
    }

    /// Successful writes so far.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn raw(&self, key: &str) -> Option<Vec<u8>> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        if self.fail_reads.get() {
            return Err(StorageError::Unavailable(format!("read of '{key}' refused")));
        }
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable(format!("write of '{key}' refused")));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_vec());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
