//! The fixed example collection used when no valid slot content exists.

use chrono::{DateTime, Utc};

use super::model::{Item, ItemType};

struct SeedItem {
    id: &'static str,
    name: &'static str,
    item_type: ItemType,
    description: &'static str,
    images: [&'static str; 2],
}

const SEED_ITEMS: [SeedItem; 3] = [
    SeedItem {
        id: "1",
        name: "Classic White T-Shirt",
        item_type: ItemType::Shirt,
        description: "A comfortable white t-shirt made from 100% organic cotton.",
        images: [
            "https://picsum.photos/id/1005/300/400",
            "https://picsum.photos/id/1006/300/400",
        ],
    },
    SeedItem {
        id: "2",
        name: "Slim Fit Jeans",
        item_type: ItemType::Pant,
        description: "Stylish slim fit jeans with a comfortable stretch fabric.",
        images: [
            "https://picsum.photos/id/1025/300/400",
            "https://picsum.photos/id/1027/300/400",
        ],
    },
    SeedItem {
        id: "3",
        name: "Running Shoes",
        item_type: ItemType::Shoes,
        description: "Lightweight running shoes with excellent cushioning.",
        images: [
            "https://picsum.photos/id/103/300/400",
            "https://picsum.photos/id/104/300/400",
        ],
    },
];

/// Builds the seed collection, stamping every item with `created_at`.
///
/// The cover image of each seed item is its first image.
pub fn seed_items(created_at: DateTime<Utc>) -> Vec<Item> {
    SEED_ITEMS
        .iter()
        .map(|seed| Item {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            item_type: seed.item_type,
            description: seed.description.to_string(),
            cover_image: seed.images[0].to_string(),
            images: seed.images.iter().map(|s| s.to_string()).collect(),
            created_at,
        })
        .collect()
}
