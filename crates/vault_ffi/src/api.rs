//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose stable, use-case-level vault functions to Dart via FRB.
//! - Own the one process-wide vault the presentation layer observes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Dates cross the boundary as epoch milliseconds (UTC).
//! - Prices cross the boundary as decimal strings, never floats.

use chrono::{DateTime, Utc};
use log::warn;
use std::sync::OnceLock;
use uuid::Uuid;
use vault_core::{
    core_version as core_version_inner, filter_items, init_logging as init_logging_inner,
    ping as ping_inner, price_to_input, Collection, Document, DocumentKind, InMemoryItemRepository, Item, ItemDraft,
    ItemFilter, ItemId, ServiceRecord, VaultService, WarrantyStatus,
};

static VAULT: OnceLock<VaultService<InMemoryItemRepository>> = OnceLock::new();

fn vault() -> &'static VaultService<InMemoryItemRepository> {
    VAULT.get_or_init(|| VaultService::new(InMemoryItemRepository::new()))
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Collection option for filter chips and pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultCollectionOption {
    /// Stable key passed back in requests.
    pub key: String,
    /// Display title.
    pub title: String,
}

/// Item row returned to list screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultItemSummary {
    pub item_id: String,
    pub name: String,
    pub collection: String,
    /// `active|expired|unknown`, evaluated at call time.
    pub warranty_status: String,
    /// Decimal string; empty when no price is recorded.
    pub price: String,
    pub created_at_ms: i64,
    pub document_count: u32,
    pub service_record_count: u32,
}

/// List response envelope; `revision` lets the UI skip redundant redraws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultListResponse {
    pub items: Vec<VaultItemSummary>,
    pub revision: u64,
    /// Human-readable diagnostics; empty on success.
    pub message: String,
}

/// Editable item fields as the add/edit form holds them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VaultItemInput {
    pub name: String,
    /// Collection key or title; `None` when nothing is selected yet.
    pub collection: Option<String>,
    pub purchase_date_ms: Option<i64>,
    pub retailer: String,
    pub price: String,
    pub warranty_provider: String,
    pub warranty_notes: String,
    pub warranty_end_ms: Option<i64>,
    pub serial_number: String,
    pub model_number: String,
    pub identifier_notes: String,
    pub photos: Vec<String>,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Affected item ID when known.
    pub item_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl VaultActionResponse {
    fn success(message: impl Into<String>, item_id: ItemId) -> Self {
        Self {
            ok: true,
            item_id: Some(item_id.to_string()),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            item_id: None,
            message: message.into(),
        }
    }
}

/// Lists every collection in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_collections() -> Vec<VaultCollectionOption> {
    Collection::ALL
        .into_iter()
        .map(|collection| VaultCollectionOption {
            key: collection.as_key().to_string(),
            title: collection.title().to_string(),
        })
        .collect()
}

/// Loads the fixed sample vault for previews and demos.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_seed_sample_data() -> VaultActionResponse {
    match vault().seed_sample_data() {
        Ok(count) => VaultActionResponse {
            ok: true,
            item_id: None,
            message: format!("seeded {count} items"),
        },
        Err(err) => VaultActionResponse::failure(format!("vault_seed_sample_data failed: {err}")),
    }
}

/// Lists items matching `text` and an optional collection key, newest first.
///
/// An unknown collection key yields an empty list with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_list(text: String, collection: Option<String>) -> VaultListResponse {
    let collection = match collection.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match Collection::parse(raw) {
            Some(parsed) => Some(parsed),
            None => {
                return VaultListResponse {
                    items: Vec::new(),
                    revision: 0,
                    message: format!("unknown collection `{raw}`"),
                };
            }
        },
    };

    let filter = ItemFilter::new(text).with_collection(collection);
    let snapshot = match vault().snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            return VaultListResponse {
                items: Vec::new(),
                revision: 0,
                message: format!("vault_list failed: {err}"),
            };
        }
    };

    let now = Utc::now();
    VaultListResponse {
        items: filter_items(&snapshot.items, &filter)
            .into_iter()
            .map(|item| summarize(item, now))
            .collect(),
        revision: snapshot.revision,
        message: String::new(),
    }
}

/// Creates an item from add-form input.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_create(input: VaultItemInput) -> VaultActionResponse {
    let draft = match to_draft(input) {
        Ok(draft) => draft,
        Err(message) => return VaultActionResponse::failure(message),
    };
    match vault().create_item(draft) {
        Ok(item) => VaultActionResponse::success("created", item.id),
        Err(err) => VaultActionResponse::failure(format!("vault_create failed: {err}")),
    }
}

/// Replaces editable fields of an existing item from edit-form input.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_update(item_id: String, input: VaultItemInput) -> VaultActionResponse {
    let id = match parse_item_id(&item_id) {
        Ok(id) => id,
        Err(message) => return VaultActionResponse::failure(message),
    };
    let draft = match to_draft(input) {
        Ok(draft) => draft,
        Err(message) => return VaultActionResponse::failure(message),
    };
    match vault().edit_item(id, &draft) {
        Ok(item) => VaultActionResponse::success("updated", item.id),
        Err(err) => VaultActionResponse::failure(format!("vault_update failed: {err}")),
    }
}

/// Attaches a document to an item.
///
/// `kind` is one of `receipt|warranty|manual|other`.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_attach_document(
    item_id: String,
    title: String,
    kind: String,
    date_ms: i64,
    location: Option<String>,
) -> VaultActionResponse {
    let id = match parse_item_id(&item_id) {
        Ok(id) => id,
        Err(message) => return VaultActionResponse::failure(message),
    };
    let Some(kind) = DocumentKind::parse(&kind) else {
        return VaultActionResponse::failure(format!("unknown document kind `{kind}`"));
    };
    let date = match from_epoch_ms(date_ms) {
        Ok(date) => date,
        Err(message) => return VaultActionResponse::failure(message),
    };

    let mut document = Document::new(title.trim(), kind, date);
    document.location = location.filter(|value| !value.trim().is_empty());
    match vault().attach_document(id, document) {
        Ok(item) => VaultActionResponse::success("document attached", item.id),
        Err(err) => VaultActionResponse::failure(format!("vault_attach_document failed: {err}")),
    }
}

/// Appends a service record; `cost` is decimal text, blank for none.
#[flutter_rust_bridge::frb(sync)]
pub fn vault_add_service_record(
    item_id: String,
    date_ms: i64,
    note: String,
    cost: String,
) -> VaultActionResponse {
    let id = match parse_item_id(&item_id) {
        Ok(id) => id,
        Err(message) => return VaultActionResponse::failure(message),
    };
    let date = match from_epoch_ms(date_ms) {
        Ok(date) => date,
        Err(message) => return VaultActionResponse::failure(message),
    };
    let cost = match vault_core::parse_price(&cost) {
        Ok(cost) => cost,
        Err(err) => return VaultActionResponse::failure(format!("invalid cost: {err}")),
    };

    let mut record = ServiceRecord::new(date, note);
    record.cost = cost;
    match vault().add_service_record(id, record) {
        Ok(item) => VaultActionResponse::success("service record added", item.id),
        Err(err) => {
            VaultActionResponse::failure(format!("vault_add_service_record failed: {err}"))
        }
    }
}

fn summarize(item: &Item, now: DateTime<Utc>) -> VaultItemSummary {
    VaultItemSummary {
        item_id: item.id.to_string(),
        name: item.name.clone(),
        collection: item.collection.title().to_string(),
        warranty_status: warranty_status_key(item.warranty_status_at(now)).to_string(),
        price: price_to_input(item.price),
        created_at_ms: item.created_at.timestamp_millis(),
        document_count: count_u32(item.documents.len()),
        service_record_count: count_u32(item.service_records.len()),
    }
}

fn warranty_status_key(status: WarrantyStatus) -> &'static str {
    match status {
        WarrantyStatus::Active => "active",
        WarrantyStatus::Expired => "expired",
        WarrantyStatus::Unknown => "unknown",
    }
}

fn count_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

fn to_draft(input: VaultItemInput) -> Result<ItemDraft, String> {
    let collection = match input.collection.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            Collection::parse(raw).ok_or_else(|| format!("unknown collection `{raw}`"))?,
        ),
    };

    Ok(ItemDraft {
        name: input.name,
        collection,
        purchase_date: input.purchase_date_ms.map(from_epoch_ms).transpose()?,
        retailer: input.retailer,
        price_text: input.price,
        warranty_provider: input.warranty_provider,
        warranty_notes: input.warranty_notes,
        warranty_end: input.warranty_end_ms.map(from_epoch_ms).transpose()?,
        serial_number: input.serial_number,
        model_number: input.model_number,
        identifier_notes: input.identifier_notes,
        photos: input.photos,
    })
}

fn parse_item_id(raw: &str) -> Result<ItemId, String> {
    Uuid::parse_str(raw.trim()).map_err(|_| {
        warn!("event=ffi_request module=ffi status=rejected reason=invalid_item_id");
        format!("invalid item id `{raw}`")
    })
}

fn from_epoch_ms(value: i64) -> Result<DateTime<Utc>, String> {
    DateTime::from_timestamp_millis(value)
        .ok_or_else(|| format!("epoch milliseconds out of range: {value}"))
}

#[cfg(test)]
mod tests {
    use super::{
        from_epoch_ms, to_draft, vault_add_service_record, vault_attach_document,
        vault_collections, vault_create, vault_list, vault_update, VaultItemInput,
    };
    use vault_core::Collection;

    fn input(name: &str, collection: &str) -> VaultItemInput {
        VaultItemInput {
            name: name.to_string(),
            collection: Some(collection.to_string()),
            ..VaultItemInput::default()
        }
    }

    #[test]
    fn collections_are_listed_in_display_order() {
        let options = vault_collections();
        assert_eq!(options.len(), Collection::ALL.len());
        assert_eq!(options[2].key, "home_and_furniture");
        assert_eq!(options[2].title, "Home & Furniture");
    }

    #[test]
    fn to_draft_rejects_unknown_collection() {
        let err = to_draft(input("Chair", "garden")).unwrap_err();
        assert!(err.contains("unknown collection"));
    }

    #[test]
    fn to_draft_keeps_unselected_collection_as_none() {
        let draft = to_draft(VaultItemInput {
            name: "Chair".to_string(),
            collection: Some("  ".to_string()),
            ..VaultItemInput::default()
        })
        .unwrap();
        assert_eq!(draft.collection, None);
    }

    #[test]
    fn epoch_ms_round_trips() {
        let date = from_epoch_ms(1_769_558_400_000).unwrap();
        assert_eq!(date.timestamp_millis(), 1_769_558_400_000);
    }

    #[test]
    fn create_update_and_attach_flow_through_global_vault() {
        let marker = format!("ffi-flow-{}", uuid::Uuid::new_v4());
        let mut create_input = input(&format!("  {marker} speaker "), "Audio");
        create_input.price = "$1,250.50".to_string();

        let created = vault_create(create_input);
        assert!(created.ok, "{}", created.message);
        let item_id = created.item_id.clone().unwrap();

        let listed = vault_list(marker.to_uppercase(), Some("audio".to_string()));
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].name, format!("{marker} speaker"));
        assert_eq!(listed.items[0].price, "1250.50");
        assert_eq!(listed.items[0].warranty_status, "unknown");

        let updated = vault_update(item_id.clone(), input(&format!("{marker} amp"), "Tech"));
        assert!(updated.ok, "{}", updated.message);

        let attached = vault_attach_document(
            item_id.clone(),
            "Receipt".to_string(),
            "receipt".to_string(),
            1_769_558_400_000,
            None,
        );
        assert!(attached.ok, "{}", attached.message);

        let serviced = vault_add_service_record(
            item_id,
            1_769_558_400_000,
            "Replaced fuse".to_string(),
            "15.00".to_string(),
        );
        assert!(serviced.ok, "{}", serviced.message);

        let listed = vault_list(marker.clone(), Some("Tech".to_string()));
        assert_eq!(listed.items.len(), 1);
        assert_eq!(listed.items[0].name, format!("{marker} amp"));
        assert_eq!(listed.items[0].document_count, 1);
        assert_eq!(listed.items[0].service_record_count, 1);
    }

    #[test]
    fn update_with_unknown_id_fails_with_message() {
        let response = vault_update(
            uuid::Uuid::new_v4().to_string(),
            input("Anything", "Other"),
        );
        assert!(!response.ok);
        assert!(response.message.contains("item not found"));

        let response = vault_update("not-a-uuid".to_string(), input("Anything", "Other"));
        assert!(!response.ok);
        assert!(response.message.contains("invalid item id"));
    }

    #[test]
    fn create_with_blank_name_fails() {
        let response = vault_create(input("   ", "Tools"));
        assert!(!response.ok);
        assert!(response.message.contains("name must not be empty"));
    }
}
