//! Slot storage backends.

mod file_slot;
mod memory_slot;

pub use file_slot::FileSlotStorage;
pub use memory_slot::InMemorySlotStorage;
