pub mod config_service;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::paths::CatalogPaths;
pub use crate::storage::{FileSlotStorage, InMemorySlotStorage};
