//! Read-only commands: list, search, show, types.

use anyhow::{Result, bail};
use catalog_core::item::filter_items;
use catalog_core::{CatalogError, CatalogStore, Item, ItemType, SlotStorage};
use std::io::Write;

fn write_row(out: &mut impl Write, item: &Item) -> Result<()> {
    writeln!(out, "{}\t{}\t{}", item.id, item.item_type, item.name)?;
    Ok(())
}

pub fn list<S: SlotStorage>(store: &CatalogStore<S>, out: &mut impl Write) -> Result<()> {
    for item in store.list() {
        write_row(out, item)?;
    }
    Ok(())
}

pub fn search<S: SlotStorage>(
    store: &CatalogStore<S>,
    query: &str,
    out: &mut impl Write,
) -> Result<()> {
    let found = filter_items(store.list(), query);
    if found.is_empty() {
        writeln!(out, "No items match '{}'", query)?;
        return Ok(());
    }
    for item in found {
        write_row(out, item)?;
    }
    Ok(())
}

const ENQUIRY_ADDRESS: &str = "enquiries@example.com";

/// Builds the `mailto:` link used to enquire about an item. Line breaks in
/// the body are pre-encoded as `%0D%0A`.
pub fn enquiry_link(item: &Item) -> String {
    let subject = format!("Enquiry about {}", item.name);
    let body = format!(
        "Hello,%0D%0A%0D%0AI am interested in the following item:%0D%0A%0D%0A\
         Item: {}%0D%0AType: {}%0D%0ADescription: {}%0D%0A%0D%0A\
         Please provide more information.",
        item.name, item.item_type, item.description
    );
    format!("mailto:{}?subject={}&body={}", ENQUIRY_ADDRESS, subject, body)
}

pub fn show<S: SlotStorage>(store: &CatalogStore<S>, id: &str, out: &mut impl Write) -> Result<()> {
    let Some(item) = store.get(id) else {
        bail!(CatalogError::not_found("item", id));
    };

    writeln!(out, "{}", item.name)?;
    writeln!(out, "  id:          {}", item.id)?;
    writeln!(out, "  type:        {}", item.item_type)?;
    writeln!(out, "  created:     {}", item.created_at.to_rfc3339())?;
    writeln!(out, "  description: {}", item.description)?;
    writeln!(out, "  cover:       {}", item.cover_image)?;
    for (index, image) in item.images.iter().enumerate() {
        writeln!(out, "  image {}:     {}", index + 1, image)?;
    }
    writeln!(out, "  enquire:     {}", enquiry_link(item))?;
    Ok(())
}

pub fn types(out: &mut impl Write) -> Result<()> {
    for item_type in ItemType::all() {
        writeln!(out, "{}", item_type)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_infrastructure::InMemorySlotStorage;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_seed() {
        let store = CatalogStore::open(InMemorySlotStorage::new());
        let output = render(|out| list(&store, out));
        assert_eq!(
            output,
            "1\tShirt\tClassic White T-Shirt\n2\tPant\tSlim Fit Jeans\n3\tShoes\tRunning Shoes\n"
        );
    }

    #[test]
    fn test_search_filters() {
        let store = CatalogStore::open(InMemorySlotStorage::new());
        assert_eq!(
            render(|out| search(&store, "running", out)),
            "3\tShoes\tRunning Shoes\n"
        );
        assert_eq!(
            render(|out| search(&store, "hat", out)),
            "No items match 'hat'\n"
        );
    }

    #[test]
    fn test_show_known_item() {
        let store = CatalogStore::open(InMemorySlotStorage::new());
        let output = render(|out| show(&store, "2", out));
        assert!(output.starts_with("Slim Fit Jeans\n"));
        assert!(output.contains("image 2:     https://picsum.photos/id/1027/300/400"));
    }

    #[test]
    fn test_show_prints_enquiry_link() {
        let store = CatalogStore::open(InMemorySlotStorage::new());
        let output = render(|out| show(&store, "1", out));
        let line = output.lines().last().unwrap();
        assert!(line.starts_with(
            "  enquire:     mailto:enquiries@example.com?subject=Enquiry about Classic White T-Shirt&body="
        ));
    }

    #[test]
    fn test_enquiry_link_body() {
        let store = CatalogStore::open(InMemorySlotStorage::new());
        let item = store.get("3").unwrap();
        assert_eq!(
            enquiry_link(item),
            "mailto:enquiries@example.com?subject=Enquiry about Running Shoes&body=\
             Hello,%0D%0A%0D%0AI am interested in the following item:%0D%0A%0D%0A\
             Item: Running Shoes%0D%0AType: Shoes%0D%0A\
             Description: Lightweight running shoes with excellent cushioning.%0D%0A%0D%0A\
             Please provide more information."
        );
    }

    #[test]
    fn test_show_unknown_item() {
        let store = CatalogStore::open(InMemorySlotStorage::new());
        let mut out = Vec::new();
        let err = show(&store, "nope", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "Entity not found: item 'nope'");
        assert!(out.is_empty());
    }

    #[test]
    fn test_types_lists_all() {
        let output = render(|out| types(out));
        assert_eq!(output.lines().count(), 10);
        assert!(output.contains("Sports Gear\n"));
    }
}
