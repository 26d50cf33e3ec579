//! Item domain models, the seed collection, and the search filter.

mod model;
mod search;
mod seed;

pub use model::{Item, ItemFormData, ItemType, timestamp_now};
pub use search::{filter_items, matches_query};
pub use seed::seed_items;
