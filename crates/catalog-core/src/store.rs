//! The catalog store.
//!
//! `CatalogStore` owns the in-memory collection for a session and mirrors it
//! to one slot of an injected [`SlotStorage`]. Consumers receive the store by
//! reference; there is no global instance.

use uuid::Uuid;

use crate::error::Result;
use crate::item::{Item, ItemFormData, seed_items, timestamp_now};
use crate::slot::SlotStorage;

/// Slot key used when none is configured.
pub const DEFAULT_SLOT_KEY: &str = "items";

type Observer = Box<dyn Fn(&[Item])>;

/// Single source of truth for the item collection.
pub struct CatalogStore<S: SlotStorage> {
    storage: S,
    slot_key: String,
    items: Vec<Item>,
    observers: Vec<Observer>,
}

impl<S: SlotStorage> CatalogStore<S> {
    /// Opens the store on the default slot.
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_SLOT_KEY)
    }

    /// Opens the store on `slot_key`, loading the persisted collection.
    ///
    /// Never fails: an absent, empty, unreadable, or unparsable slot yields
    /// the seed collection. Nothing is written until the first `add`.
    pub fn open_with_key(storage: S, slot_key: impl Into<String>) -> Self {
        let slot_key = slot_key.into();
        let items = load_collection(&storage, &slot_key);

        tracing::debug!(
            "[CatalogStore] Opened slot '{}' with {} items",
            slot_key,
            items.len()
        );

        Self {
            storage,
            slot_key,
            items,
            observers: Vec::new(),
        }
    }

    /// The slot this store persists to.
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// The collection, oldest first.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Finds an item by id.
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers a callback that receives the full collection after every `add`.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: Fn(&[Item]) + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Creates an item from `data`, appends it, and rewrites the slot.
    ///
    /// The id and timestamp are generated here and nowhere else. Observers are
    /// notified before the slot is written. If the write fails the error is
    /// returned, but the item stays in memory and the slot keeps its old
    /// content.
    pub fn add(&mut self, data: ItemFormData) -> Result<Item> {
        let item = Item::from_form(data, self.next_id(), timestamp_now());
        self.items.push(item.clone());

        tracing::info!(
            "[CatalogStore] Added item '{}' ({}) to slot '{}'",
            item.name,
            item.id,
            self.slot_key
        );

        for observer in &self.observers {
            observer(&self.items);
        }

        self.persist()?;
        Ok(item)
    }

    fn next_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    /// Writes the whole collection to the slot.
    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string(&self.items)?;
        self.storage.write(&self.slot_key, &serialized)
    }
}

fn load_collection<S: SlotStorage>(storage: &S, slot_key: &str) -> Vec<Item> {
    let raw = match storage.read(slot_key) {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => {
            tracing::debug!("[CatalogStore] Slot '{}' is empty, using seed items", slot_key);
            return seed_items(timestamp_now());
        }
        Err(e) => {
            tracing::warn!(
                "[CatalogStore] Failed to read slot '{}', using seed items: {}",
                slot_key,
                e
            );
            return seed_items(timestamp_now());
        }
    };

    match serde_json::from_str::<Vec<Item>>(&raw) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(
                "[CatalogStore] Slot '{}' holds invalid data, using seed items: {}",
                slot_key,
                e
            );
            seed_items(timestamp_now())
        }
    }
}
