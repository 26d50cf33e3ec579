//! Client-side search over a collection.
//!
//! The store never filters; browse views call these helpers on `list()`.

use super::model::Item;

/// Case-insensitive substring match over name, type label, and description.
/// An empty query matches every item.
pub fn matches_query(item: &Item, query: &str) -> bool {
    let needle = query.to_lowercase();
    item.name.to_lowercase().contains(&needle)
        || item.item_type.to_string().to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
}

/// Returns the items matching `query`, in collection order.
pub fn filter_items<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| matches_query(item, query))
        .collect()
}
