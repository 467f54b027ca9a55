//! Core domain logic for ProofVault.
//! This crate is the single source of truth for vault invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::{Document, DocumentId, DocumentKind, ServiceRecord, ServiceRecordId};
pub use model::item::{
    Collection, Item, ItemDraft, ItemId, ItemValidationError, PhotoRef, WarrantyStatus,
};
pub use model::money::{parse_price, price_to_input};
pub use repo::item_repo::{
    InMemoryItemRepository, ItemRepository, RepoError, RepoResult, VaultSnapshot,
};
pub use search::filter::{filter_items, ItemFilter};
pub use service::vault_service::{Clock, VaultService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
