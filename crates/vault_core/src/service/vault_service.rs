//! Vault use-case service.
//!
//! # Responsibility
//! - Provide add/edit/attach/list/filter entry points for core callers.
//! - Normalize drafts (trimmed name, parsed price) before they reach storage.
//! - Stamp creation time from an injectable clock.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Update misses surface as `RepoError::NotFound`, never as a silent no-op.
//! - Logged events carry ids and counts only, never names or notes.

use crate::model::document::{Document, ServiceRecord};
use crate::model::item::{Item, ItemDraft, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoResult, VaultSnapshot};
use crate::search::filter::{filter_items, ItemFilter};
use crate::seed::sample_items;
use chrono::{DateTime, Utc};
use log::{info, warn};
use uuid::Uuid;

/// Clock used to stamp `Item::created_at`.
pub type Clock = fn() -> DateTime<Utc>;

/// Use-case service over a vault repository.
pub struct VaultService<R: ItemRepository> {
    repo: R,
    clock: Clock,
}

impl<R: ItemRepository> VaultService<R> {
    /// Creates a service stamping items with the system clock.
    pub fn new(repo: R) -> Self {
        Self::with_clock(repo, Utc::now)
    }

    /// Creates a service with a caller-provided clock.
    pub fn with_clock(repo: R, clock: Clock) -> Self {
        Self { repo, clock }
    }

    /// Current time according to the service clock.
    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    /// Creates an item from an add-flow draft and places it at the head.
    ///
    /// # Contract
    /// - Name is trimmed; blank names fail with `EmptyName`.
    /// - Collection must be selected; price text must parse.
    /// - Returns the stored item including its fresh id.
    pub fn create_item(&self, draft: ItemDraft) -> RepoResult<Item> {
        let item = draft
            .into_item(Uuid::new_v4(), self.now())
            .inspect_err(|err| {
                warn!("event=item_create module=vault status=rejected reason={err}");
            })?;
        self.repo.insert_front(&item)?;
        info!(
            "event=item_create module=vault status=ok item_id={} collection={}",
            item.id,
            item.collection.as_key()
        );
        Ok(item)
    }

    /// Replaces an existing item by stable ID.
    ///
    /// The name is trimmed before validation. The stored `created_at` is kept.
    pub fn update_item(&self, item: &Item) -> RepoResult<Item> {
        let mut normalized = item.clone();
        normalized.name = normalized.name.trim().to_string();
        let stored = self.repo.replace(&normalized)?;
        info!(
            "event=item_update module=vault status=ok item_id={}",
            stored.id
        );
        Ok(stored)
    }

    /// Applies an edit-flow draft to the stored item with `id`.
    ///
    /// The draft is applied to the current stored record under the store's
    /// write lock, so attachments added concurrently are kept.
    pub fn edit_item(&self, id: ItemId, draft: &ItemDraft) -> RepoResult<Item> {
        let stored = self.repo.modify(id, |item| {
            *item = draft.apply_to(item)?;
            Ok(())
        })?;
        info!("event=item_edit module=vault status=ok item_id={id}");
        Ok(stored)
    }

    /// Appends a document to an item.
    pub fn attach_document(&self, id: ItemId, document: Document) -> RepoResult<Item> {
        let document_id = document.id;
        let stored = self.repo.modify(id, |item| {
            item.documents.push(document);
            Ok(())
        })?;
        info!(
            "event=document_attach module=vault status=ok item_id={id} document_id={document_id} count={}",
            stored.documents.len()
        );
        Ok(stored)
    }

    /// Appends a service record to an item's history.
    pub fn add_service_record(&self, id: ItemId, record: ServiceRecord) -> RepoResult<Item> {
        let stored = self.repo.modify(id, |item| {
            item.service_records.push(record);
            Ok(())
        })?;
        info!(
            "event=service_record_add module=vault status=ok item_id={id} count={}",
            stored.service_records.len()
        );
        Ok(stored)
    }

    pub fn get_item(&self, id: ItemId) -> RepoResult<Option<Item>> {
        self.repo.get(id)
    }

    /// Full newest-first item sequence.
    pub fn list_items(&self) -> RepoResult<Vec<Item>> {
        Ok(self.repo.snapshot()?.items)
    }

    /// Items plus the store revision, for observers that poll for change.
    pub fn snapshot(&self) -> RepoResult<VaultSnapshot> {
        self.repo.snapshot()
    }

    /// Items accepted by `filter`, preserving store order.
    pub fn filter_items(&self, filter: &ItemFilter) -> RepoResult<Vec<Item>> {
        let snapshot = self.repo.snapshot()?;
        Ok(filter_items(&snapshot.items, filter)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Inserts the fixed sample dataset.
    ///
    /// Items are inserted oldest first so the resulting head order matches
    /// `seed::sample_items()`. Returns the number of inserted items.
    pub fn seed_sample_data(&self) -> RepoResult<usize> {
        let items = sample_items();
        for item in items.iter().rev() {
            self.repo.insert_front(item)?;
        }
        info!(
            "event=vault_seed module=vault status=ok count={}",
            items.len()
        );
        Ok(items.len())
    }
}

#[cfg(test)]
mod tests {
    use super::VaultService;
    use crate::model::item::{Collection, ItemDraft};
    use crate::repo::item_repo::InMemoryItemRepository;
    use chrono::{DateTime, TimeZone, Utc};

    fn fixed_clock() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 28, 9, 30, 0).unwrap()
    }

    #[test]
    fn create_item_uses_service_clock() {
        let service = VaultService::with_clock(InMemoryItemRepository::new(), fixed_clock);
        let item = service
            .create_item(ItemDraft::new("Toaster", Collection::Appliances))
            .unwrap();
        assert_eq!(item.created_at, fixed_clock());
    }
}
