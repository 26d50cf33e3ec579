use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use catalog_core::error::Result;
use catalog_core::item::filter_items;
use catalog_core::{CatalogStore, Item, ItemFormData, ItemType, SlotStorage};

/// Slots shared between store instances, standing in for browser storage
/// that outlives a session.
#[derive(Clone, Default)]
struct SharedSlots(Rc<RefCell<HashMap<String, String>>>);

impl SlotStorage for SharedSlots {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.0.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.0.borrow_mut().remove(key);
        Ok(())
    }
}

fn cap() -> ItemFormData {
    ItemFormData {
        name: "Cap".to_string(),
        item_type: ItemType::Accessories,
        description: "Red cap".to_string(),
        cover_image: "img://cap.jpg".to_string(),
        images: vec!["img://cap.jpg".to_string()],
    }
}

#[test]
fn test_add_cap_to_seed_collection() {
    let mut store = CatalogStore::open(SharedSlots::default());
    assert_eq!(store.len(), 3);

    let created = store.add(cap()).unwrap();

    let items = store.list();
    assert_eq!(items.len(), 4);
    let fourth = &items[3];
    assert_eq!(fourth.name, "Cap");
    assert_eq!(fourth.item_type, ItemType::Accessories);
    assert_eq!(fourth.id, created.id);
    assert!(!["1", "2", "3"].contains(&fourth.id.as_str()));
    for seed in &items[..3] {
        assert!(fourth.created_at >= seed.created_at);
    }
}

#[test]
fn test_reload_yields_same_collection() {
    let slots = SharedSlots::default();

    let before: Vec<Item> = {
        let mut store = CatalogStore::open(slots.clone());
        store.add(cap()).unwrap();
        let mut jacket = cap();
        jacket.name = "Rain Jacket".to_string();
        jacket.item_type = ItemType::Outerwear;
        jacket.images.push("img://jacket-back.jpg".to_string());
        store.add(jacket).unwrap();
        store.list().to_vec()
    };

    let reopened = CatalogStore::open(slots);
    assert_eq!(reopened.list(), before.as_slice());
}

#[test]
fn test_cleared_slot_falls_back_to_seed() {
    let slots = SharedSlots::default();
    {
        let mut store = CatalogStore::open(slots.clone());
        store.add(cap()).unwrap();
    }

    slots.remove("items").unwrap();

    let store = CatalogStore::open(slots);
    let ids: Vec<&str> = store.list().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn test_search_sees_new_items() {
    let mut store = CatalogStore::open(SharedSlots::default());
    store.add(cap()).unwrap();

    let found = filter_items(store.list(), "red");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Cap");

    let accessories = filter_items(store.list(), "accessories");
    assert_eq!(accessories.len(), 1);
}
