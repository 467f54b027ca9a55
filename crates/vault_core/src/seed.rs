//! Fixed sample vault for development and UI previews.
//!
//! Not part of the production contract: ids, dates and values are constant
//! so tests and previews render the same vault every run.

use crate::model::document::{Document, DocumentKind, ServiceRecord};
use crate::model::item::{Collection, Item};
use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

pub const ESPRESSO_PRO_ID: Uuid = Uuid::from_u128(0x5eed_0001_0000_4000_8000_000000000001);
pub const STUDIO_HEADPHONES_ID: Uuid = Uuid::from_u128(0x5eed_0002_0000_4000_8000_000000000002);

fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Sample items in newest-first order, one per collection.
pub fn sample_items() -> Vec<Item> {
    let mut espresso = Item::with_id(
        ESPRESSO_PRO_ID,
        "Espresso Pro",
        Collection::Appliances,
        day(2026, 1, 27),
    );
    espresso.purchase_date = Some(day(2024, 11, 29));
    espresso.retailer = "Kitchen Supply Co.".to_string();
    espresso.price = Some(Decimal::new(64_999, 2));
    espresso.warranty_provider = "Manufacturer".to_string();
    espresso.warranty_end = Some(day(2026, 11, 29));
    espresso.serial_number = "EP-2024-118273".to_string();
    espresso.model_number = "EP-900".to_string();
    espresso.documents.push(Document {
        id: Uuid::from_u128(0x5eed_0001_0000_4000_8000_0000000000d1),
        title: "Purchase receipt".to_string(),
        kind: DocumentKind::Receipt,
        date: day(2024, 11, 29),
        location: None,
    });
    espresso.service_records.push(ServiceRecord {
        id: Uuid::from_u128(0x5eed_0001_0000_4000_8000_0000000000a1),
        date: day(2025, 9, 12),
        note: "Descaled and replaced group gasket".to_string(),
        cost: Some(Decimal::new(4_500, 2)),
        documents: Vec::new(),
    });

    let mut headphones = Item::with_id(
        STUDIO_HEADPHONES_ID,
        "Studio Headphones",
        Collection::Audio,
        day(2026, 1, 20),
    );
    headphones.purchase_date = Some(day(2023, 6, 2));
    headphones.retailer = "Sound Outlet".to_string();
    headphones.price = Some(Decimal::new(34_900, 2));
    headphones.warranty_end = Some(day(2025, 6, 2));
    headphones.serial_number = "SH-77-0042".to_string();

    let mut laptop = Item::with_id(
        Uuid::from_u128(0x5eed_0003_0000_4000_8000_000000000003),
        "MacBook Air",
        Collection::Tech,
        day(2026, 1, 14),
    );
    laptop.price = Some(Decimal::new(119_900, 2));
    laptop.warranty_end = Some(day(2027, 3, 1));
    laptop.model_number = "A2681".to_string();

    let mut table = Item::with_id(
        Uuid::from_u128(0x5eed_0004_0000_4000_8000_000000000004),
        "Oak Dining Table",
        Collection::HomeAndFurniture,
        day(2026, 1, 9),
    );
    table.retailer = "Woodworks".to_string();

    let mut drill = Item::with_id(
        Uuid::from_u128(0x5eed_0005_0000_4000_8000_000000000005),
        "Cordless Drill",
        Collection::Tools,
        day(2026, 1, 3),
    );
    drill.price = Some(Decimal::new(12_950, 2));
    drill.warranty_notes = "Battery covered for 2 years".to_string();

    let tent = Item::with_id(
        Uuid::from_u128(0x5eed_0006_0000_4000_8000_000000000006),
        "Camping Tent",
        Collection::Outdoor,
        day(2025, 12, 18),
    );

    let umbrella = Item::with_id(
        Uuid::from_u128(0x5eed_0007_0000_4000_8000_000000000007),
        "Umbrella Stand",
        Collection::Other,
        day(2025, 12, 2),
    );

    vec![espresso, headphones, laptop, table, drill, tent, umbrella]
}

#[cfg(test)]
mod tests {
    use super::sample_items;
    use crate::model::item::Collection;
    use std::collections::HashSet;

    #[test]
    fn sample_items_are_valid_and_cover_every_collection() {
        let items = sample_items();
        for item in &items {
            item.validate().unwrap();
        }

        let collections: HashSet<Collection> = items.iter().map(|item| item.collection).collect();
        assert_eq!(collections.len(), Collection::ALL.len());
    }

    #[test]
    fn sample_items_are_deterministic() {
        assert_eq!(sample_items(), sample_items());
    }
}
