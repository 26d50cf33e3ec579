pub mod config;
pub mod error;
pub mod item;
pub mod slot;
pub mod store;

// Re-export common types
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use item::{Item, ItemFormData, ItemType};
pub use slot::SlotStorage;
pub use store::{CatalogStore, DEFAULT_SLOT_KEY};
