//! The add-item flow: validate submitted fields, then hand them to the store.

use anyhow::{Context, Result, bail};
use catalog_core::{CatalogStore, ItemFormData, ItemType, SlotStorage};
use std::io::Write;

/// Fields as submitted on the command line.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub name: String,
    pub item_type: ItemType,
    pub description: String,
    pub cover_image: Option<String>,
    pub images: Vec<String>,
}

impl AddRequest {
    /// Checks the submission and converts it to store input.
    ///
    /// The cover image defaults to the first image.
    pub fn into_form(self) -> Result<ItemFormData> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            bail!("Item name is required");
        }
        if self.images.iter().all(|image| image.trim().is_empty()) {
            bail!("At least one image is required");
        }
        let images: Vec<String> = self
            .images
            .into_iter()
            .filter(|image| !image.trim().is_empty())
            .collect();

        let cover_image = match self.cover_image {
            Some(cover) if !cover.trim().is_empty() => cover,
            _ => images[0].clone(),
        };

        Ok(ItemFormData {
            name,
            item_type: self.item_type,
            description: self.description,
            cover_image,
            images,
        })
    }
}

pub fn run<S: SlotStorage>(
    store: &mut CatalogStore<S>,
    request: AddRequest,
    out: &mut impl Write,
) -> Result<()> {
    let form = request.into_form()?;
    let item = store
        .add(form)
        .with_context(|| format!("Failed to save item to slot '{}'", store.slot_key()))?;

    writeln!(out, "Added '{}' with id {}", item.name, item.id)?;
    Ok(())
}

/// Parses an item type label for clap.
pub fn parse_item_type(value: &str) -> Result<ItemType, String> {
    value.parse::<ItemType>().map_err(|_| {
        let valid: Vec<String> = ItemType::all().iter().map(|t| t.to_string()).collect();
        format!("Please select a valid item type: {}", valid.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_infrastructure::InMemorySlotStorage;

    fn request() -> AddRequest {
        AddRequest {
            name: "Cap".to_string(),
            item_type: ItemType::Accessories,
            description: "Red cap".to_string(),
            cover_image: None,
            images: vec!["img://cap.jpg".to_string(), "img://cap-side.jpg".to_string()],
        }
    }

    #[test]
    fn test_cover_defaults_to_first_image() {
        let form = request().into_form().unwrap();
        assert_eq!(form.cover_image, "img://cap.jpg");
        assert_eq!(form.images.len(), 2);
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut req = request();
        req.name = "   ".to_string();
        let err = req.into_form().unwrap_err();
        assert_eq!(err.to_string(), "Item name is required");
    }

    #[test]
    fn test_images_required() {
        let mut req = request();
        req.images = vec![" ".to_string()];
        let err = req.into_form().unwrap_err();
        assert_eq!(err.to_string(), "At least one image is required");
    }

    #[test]
    fn test_run_adds_to_store() {
        let storage = InMemorySlotStorage::new();
        let mut store = CatalogStore::open(storage.clone());
        let mut out = Vec::new();

        run(&mut store, request(), &mut out).unwrap();

        assert_eq!(store.len(), 4);
        let added = &store.list()[3];
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("Added 'Cap' with id {}\n", added.id));
        assert!(storage.raw("items").is_some());
    }

    #[test]
    fn test_run_reports_write_failure() {
        let storage = InMemorySlotStorage::new();
        storage.set_reject_writes(true);
        let mut store = CatalogStore::open(storage);
        let mut out = Vec::new();

        let err = run(&mut store, request(), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Failed to save item to slot 'items'");
        assert!(out.is_empty());
    }

    #[test]
    fn test_parse_item_type() {
        assert_eq!(parse_item_type("Sports Gear"), Ok(ItemType::SportsGear));
        let err = parse_item_type("Hat").unwrap_err();
        assert!(err.starts_with("Please select a valid item type: Shirt, Pant"));
    }
}
