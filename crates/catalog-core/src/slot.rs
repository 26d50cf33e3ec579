//! Slot storage trait.
//!
//! A slot is a named location in local key-value storage. The catalog keeps
//! its whole collection in one slot as a JSON string.

use crate::error::Result;

/// Key-value persistence collaborator injected into the store.
pub trait SlotStorage {
    /// Reads the raw value of a slot. Returns `Ok(None)` if the slot was never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the slot with `value`.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes the slot. Removing an absent slot succeeds.
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: SlotStorage + ?Sized> SlotStorage for &S {
    fn read(&self, key: &str) -> Result<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
