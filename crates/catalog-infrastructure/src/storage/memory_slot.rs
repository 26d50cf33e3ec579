//! In-memory slot storage.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use catalog_core::error::{CatalogError, Result};
use catalog_core::slot::SlotStorage;

/// Slot storage backed by a `HashMap`.
///
/// Clones share the same slots, so a second store opened on a clone sees
/// what the first one wrote, like a new browser session on the same origin.
#[derive(Debug, Clone, Default)]
pub struct InMemorySlotStorage {
    slots: Rc<RefCell<HashMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl InMemorySlotStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with one slot already populated.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.slots.borrow_mut().insert(key.into(), value.into());
        storage
    }

    /// Makes every subsequent write fail, as a full storage quota would.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Returns the raw slot value without going through the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl SlotStorage for InMemorySlotStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if self.reject_writes.get() {
            return Err(CatalogError::storage(format!(
                "Storage quota exceeded while writing slot '{}'",
                key
            )));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.slots.borrow_mut().remove(key);
        Ok(())
    }
}
