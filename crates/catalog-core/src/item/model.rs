//! Item domain model.
//!
//! An [`Item`] is one catalog entry. Items are created by the store from an
//! [`ItemFormData`], which carries everything except the identifier and the
//! creation timestamp.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// The closed set of item categories.
///
/// Serialized and displayed with the labels shown to users, so
/// `SportsGear` round-trips as `"Sports Gear"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum ItemType {
    Shirt,
    Pant,
    Shoes,
    #[serde(rename = "Sports Gear")]
    #[strum(serialize = "Sports Gear")]
    SportsGear,
    Accessories,
    Outerwear,
    Underwear,
    Swimwear,
    Activewear,
    Other,
}

impl ItemType {
    /// Returns every item type in display order.
    pub fn all() -> Vec<ItemType> {
        ItemType::iter().collect()
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque unique identifier, assigned by the store.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub description: String,
    /// Primary image reference (URL or data URL).
    pub cover_image: String,
    /// Image references in upload order.
    pub images: Vec<String>,
    /// Set once when the store creates the item. Stored with millisecond
    /// precision, e.g. `2024-05-01T10:00:00.000Z`.
    #[serde(with = "millis_timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Builds an item from submitted form data plus the generated fields.
    pub fn from_form(data: ItemFormData, id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: data.name,
            item_type: data.item_type,
            description: data.description,
            cover_image: data.cover_image,
            images: data.images,
            created_at,
        }
    }

    /// Returns the form-data view of this item (everything but id/createdAt).
    pub fn to_form(&self) -> ItemFormData {
        ItemFormData {
            name: self.name.clone(),
            item_type: self.item_type,
            description: self.description.clone(),
            cover_image: self.cover_image.clone(),
            images: self.images.clone(),
        }
    }
}

/// Item fields supplied by the add-flow. The store generates `id` and
/// `createdAt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFormData {
    pub name: String,
    pub item_type: ItemType,
    pub description: String,
    pub cover_image: String,
    pub images: Vec<String>,
}

/// Current time truncated to the precision timestamps are stored with.
pub fn timestamp_now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

mod millis_timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        DateTime::<Utc>::deserialize(deserializer)
    }
}
