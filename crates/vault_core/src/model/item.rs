//! Item domain model.
//!
//! # Responsibility
//! - Define the canonical record for one owned possession.
//! - Derive warranty status from the end date and an evaluation instant.
//! - Turn add/edit drafts into validated items.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `name` is non-empty after trimming for any stored item.
//! - `price` and service costs are never negative.
//! - `warranty_status` is computed on every read and never stored.

use crate::model::document::{Document, DocumentId, ServiceRecord, ServiceRecordId};
use crate::model::money::{parse_price, price_to_input};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every vault item.
pub type ItemId = Uuid;

/// Opaque photo location handle, resolved by the platform layer.
pub type PhotoRef = String;

/// Closed set of item categories used for grouping and filtering.
///
/// Adding a case is a code change; there is no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Appliances,
    Tech,
    HomeAndFurniture,
    Tools,
    Outdoor,
    Audio,
    Other,
}

impl Collection {
    /// Every collection in display order.
    pub const ALL: [Collection; 7] = [
        Self::Appliances,
        Self::Tech,
        Self::HomeAndFurniture,
        Self::Tools,
        Self::Outdoor,
        Self::Audio,
        Self::Other,
    ];

    /// Human-facing collection name.
    pub fn title(self) -> &'static str {
        match self {
            Self::Appliances => "Appliances",
            Self::Tech => "Tech",
            Self::HomeAndFurniture => "Home & Furniture",
            Self::Tools => "Tools",
            Self::Outdoor => "Outdoor",
            Self::Audio => "Audio",
            Self::Other => "Other",
        }
    }

    /// Stable snake_case key, matching the serialized form.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Appliances => "appliances",
            Self::Tech => "tech",
            Self::HomeAndFurniture => "home_and_furniture",
            Self::Tools => "tools",
            Self::Outdoor => "outdoor",
            Self::Audio => "audio",
            Self::Other => "other",
        }
    }

    /// Parses either the display title or the key, case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_lowercase();
        Self::ALL.into_iter().find(|collection| {
            collection.as_key() == normalized || collection.title().to_lowercase() == normalized
        })
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Derived warranty classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarrantyStatus {
    Active,
    Expired,
    /// No warranty end date recorded.
    Unknown,
}

impl WarrantyStatus {
    /// Classifies a warranty end date against `now`.
    ///
    /// An end date equal to `now` still counts as active.
    pub fn evaluate(warranty_end: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Self {
        match warranty_end {
            None => Self::Unknown,
            Some(end) if end >= now => Self::Active,
            Some(_) => Self::Expired,
        }
    }
}

/// Validation failures for item writes and draft conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    NilId,
    EmptyName,
    MissingCollection,
    InvalidPrice(String),
    NegativePrice(Decimal),
    EmptyDocumentTitle(DocumentId),
    NegativeServiceCost(ServiceRecordId),
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
            Self::EmptyName => write!(f, "item name must not be empty"),
            Self::MissingCollection => write!(f, "item collection must be selected"),
            Self::InvalidPrice(input) => write!(f, "invalid price `{input}`"),
            Self::NegativePrice(value) => write!(f, "price must not be negative, got {value}"),
            Self::EmptyDocumentTitle(id) => write!(f, "document {id} has an empty title"),
            Self::NegativeServiceCost(id) => {
                write!(f, "service record {id} has a negative cost")
            }
        }
    }
}

impl Error for ItemValidationError {}

/// Canonical record for one owned possession.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub collection: Collection,
    pub purchase_date: Option<DateTime<Utc>>,
    pub retailer: String,
    pub price: Option<Decimal>,
    pub warranty_provider: String,
    pub warranty_notes: String,
    pub warranty_end: Option<DateTime<Utc>>,
    pub serial_number: String,
    pub model_number: String,
    pub identifier_notes: String,
    pub photos: Vec<PhotoRef>,
    pub documents: Vec<Document>,
    pub service_records: Vec<ServiceRecord>,
    /// Set by the store at creation; kept across updates.
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Creates an item with a generated stable ID and empty optional fields.
    pub fn new(name: impl Into<String>, collection: Collection, created_at: DateTime<Utc>) -> Self {
        Self::with_id(Uuid::new_v4(), name, collection, created_at)
    }

    /// Creates an item with a caller-provided ID.
    ///
    /// Used by seed data where identity must be deterministic. Does not
    /// validate; writes through the repository do.
    pub fn with_id(
        id: ItemId,
        name: impl Into<String>,
        collection: Collection,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            collection,
            purchase_date: None,
            retailer: String::new(),
            price: None,
            warranty_provider: String::new(),
            warranty_notes: String::new(),
            warranty_end: None,
            serial_number: String::new(),
            model_number: String::new(),
            identifier_notes: String::new(),
            photos: Vec::new(),
            documents: Vec::new(),
            service_records: Vec::new(),
            created_at,
        }
    }

    /// Warranty status evaluated at `now`.
    pub fn warranty_status_at(&self, now: DateTime<Utc>) -> WarrantyStatus {
        WarrantyStatus::evaluate(self.warranty_end, now)
    }

    /// Warranty status evaluated against the system clock.
    pub fn warranty_status(&self) -> WarrantyStatus {
        self.warranty_status_at(Utc::now())
    }

    /// Checks write invariants and reports the first violation.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if let Some(price) = self.price {
            if price.is_sign_negative() && !price.is_zero() {
                return Err(ItemValidationError::NegativePrice(price));
            }
        }
        validate_documents(&self.documents)?;
        for record in &self.service_records {
            if let Some(cost) = record.cost {
                if cost.is_sign_negative() && !cost.is_zero() {
                    return Err(ItemValidationError::NegativeServiceCost(record.id));
                }
            }
            validate_documents(&record.documents)?;
        }
        Ok(())
    }
}

fn validate_documents(documents: &[Document]) -> Result<(), ItemValidationError> {
    match documents.iter().find(|doc| doc.title.trim().is_empty()) {
        Some(doc) => Err(ItemValidationError::EmptyDocumentTitle(doc.id)),
        None => Ok(()),
    }
}

/// Editable field set for the add and edit flows.
///
/// Holds values the way an entry form does: collection may still be unset
/// and the price is raw text. Attachments are not edited through drafts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub collection: Option<Collection>,
    pub purchase_date: Option<DateTime<Utc>>,
    pub retailer: String,
    pub price_text: String,
    pub warranty_provider: String,
    pub warranty_notes: String,
    pub warranty_end: Option<DateTime<Utc>>,
    pub serial_number: String,
    pub model_number: String,
    pub identifier_notes: String,
    pub photos: Vec<PhotoRef>,
}

impl ItemDraft {
    /// Blank draft with only a name and collection, as the add flow starts.
    pub fn new(name: impl Into<String>, collection: Collection) -> Self {
        Self {
            name: name.into(),
            collection: Some(collection),
            ..Self::default()
        }
    }

    /// Whether the draft would pass conversion; mirrors the save button state.
    pub fn is_saveable(&self) -> bool {
        self.normalized_name().is_ok()
            && self.collection.is_some()
            && parse_price(&self.price_text).is_ok()
    }

    /// Builds a new item from this draft.
    ///
    /// # Errors
    /// - `EmptyName`, `MissingCollection`, `InvalidPrice`, `NegativePrice`.
    pub fn into_item(
        self,
        id: ItemId,
        created_at: DateTime<Utc>,
    ) -> Result<Item, ItemValidationError> {
        let collection = self.collection.ok_or(ItemValidationError::MissingCollection)?;
        let mut item = Item::with_id(id, String::new(), collection, created_at);
        self.write_fields(&mut item)?;
        item.validate()?;
        Ok(item)
    }

    /// Returns a copy of `item` with this draft's fields applied.
    ///
    /// Identity, creation time and attachments are carried over unchanged.
    pub fn apply_to(&self, item: &Item) -> Result<Item, ItemValidationError> {
        let mut updated = item.clone();
        updated.collection = self.collection.ok_or(ItemValidationError::MissingCollection)?;
        self.write_fields(&mut updated)?;
        updated.validate()?;
        Ok(updated)
    }

    fn normalized_name(&self) -> Result<String, ItemValidationError> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        Ok(trimmed.to_string())
    }

    fn write_fields(&self, item: &mut Item) -> Result<(), ItemValidationError> {
        item.name = self.normalized_name()?;
        item.price = parse_price(&self.price_text)?;
        item.purchase_date = self.purchase_date;
        item.retailer = self.retailer.clone();
        item.warranty_provider = self.warranty_provider.clone();
        item.warranty_notes = self.warranty_notes.clone();
        item.warranty_end = self.warranty_end;
        item.serial_number = self.serial_number.clone();
        item.model_number = self.model_number.clone();
        item.identifier_notes = self.identifier_notes.clone();
        item.photos = self.photos.clone();
        Ok(())
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            collection: Some(item.collection),
            purchase_date: item.purchase_date,
            retailer: item.retailer.clone(),
            price_text: price_to_input(item.price),
            warranty_provider: item.warranty_provider.clone(),
            warranty_notes: item.warranty_notes.clone(),
            warranty_end: item.warranty_end,
            serial_number: item.serial_number.clone(),
            model_number: item.model_number.clone(),
            identifier_notes: item.identifier_notes.clone(),
            photos: item.photos.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Collection, WarrantyStatus};
    use chrono::{TimeZone, Utc};

    #[test]
    fn collection_parse_accepts_title_and_key() {
        assert_eq!(
            Collection::parse("home & furniture"),
            Some(Collection::HomeAndFurniture)
        );
        assert_eq!(
            Collection::parse("HOME_AND_FURNITURE"),
            Some(Collection::HomeAndFurniture)
        );
        assert_eq!(Collection::parse("garden"), None);
    }

    #[test]
    fn warranty_ending_exactly_now_is_active() {
        let now = Utc.with_ymd_and_hms(2026, 1, 28, 12, 0, 0).unwrap();
        assert_eq!(
            WarrantyStatus::evaluate(Some(now), now),
            WarrantyStatus::Active
        );
    }
}
