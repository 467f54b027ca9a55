//! Item repository contract and in-memory vault store.
//!
//! # Responsibility
//! - Hold the single ordered sequence of items for the process.
//! - Provide create/update/read APIs with explicit error signals.
//!
//! # Invariants
//! - Write paths call `Item::validate()` before mutating state.
//! - Sequence order is newest-first by insertion; updates never reorder.
//! - `revision` increases by one on every successful mutation and only then.
//! - All access goes through one `RwLock`: one writer at a time, readers
//!   observe a consistent snapshot.

use crate::model::item::{Item, ItemId, ItemValidationError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for vault store operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ItemValidationError),
    NotFound(ItemId),
    DuplicateId(ItemId),
    /// A writer panicked while holding the store lock.
    LockPoisoned,
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::DuplicateId(id) => write!(f, "item already exists: {id}"),
            Self::LockPoisoned => write!(f, "vault store lock poisoned"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) | Self::DuplicateId(_) | Self::LockPoisoned => None,
        }
    }
}

impl From<ItemValidationError> for RepoError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Point-in-time view of the store for observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultSnapshot {
    /// Mutation counter; changes whenever `items` may have changed.
    pub revision: u64,
    /// Newest-first item sequence.
    pub items: Vec<Item>,
}

/// Repository interface for vault item storage.
pub trait ItemRepository {
    /// Inserts a new item at the head of the sequence.
    fn insert_front(&self, item: &Item) -> RepoResult<ItemId>;
    /// Replaces the stored item with the same ID in place and returns it.
    fn replace(&self, item: &Item) -> RepoResult<Item>;
    /// Applies `change` to the stored item with `id` and returns the result.
    ///
    /// Lookup, change, validation and write happen under one write guard,
    /// so concurrent modifications of the same item never lose updates.
    /// Nothing is written when `change` or validation fails.
    fn modify<F>(&self, id: ItemId, change: F) -> RepoResult<Item>
    where
        F: FnOnce(&mut Item) -> Result<(), ItemValidationError>;
    fn get(&self, id: ItemId) -> RepoResult<Option<Item>>;
    fn snapshot(&self) -> RepoResult<VaultSnapshot>;
}

#[derive(Debug, Default)]
struct VaultState {
    revision: u64,
    items: Vec<Item>,
}

impl VaultState {
    fn position(&self, id: ItemId) -> RepoResult<usize> {
        self.items
            .iter()
            .position(|existing| existing.id == id)
            .ok_or_else(|| {
                info!("event=item_replace module=repo status=not_found item_id={id}");
                RepoError::NotFound(id)
            })
    }

    /// Writes `item` at `position`, keeping the stored id and `created_at`.
    fn store_at(&mut self, position: usize, mut item: Item) -> Item {
        let current = &self.items[position];
        item.id = current.id;
        item.created_at = current.created_at;
        self.items[position] = item.clone();
        self.revision += 1;
        debug!(
            "event=item_replace module=repo status=ok item_id={} position={} revision={}",
            item.id, position, self.revision
        );
        item
    }
}

/// Process-local vault store backed by a vector.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    state: RwLock<VaultState>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RepoResult<RwLockReadGuard<'_, VaultState>> {
        self.state.read().map_err(|_| RepoError::LockPoisoned)
    }

    fn write(&self) -> RepoResult<RwLockWriteGuard<'_, VaultState>> {
        self.state.write().map_err(|_| RepoError::LockPoisoned)
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn insert_front(&self, item: &Item) -> RepoResult<ItemId> {
        item.validate()?;

        let mut state = self.write()?;
        if state.items.iter().any(|existing| existing.id == item.id) {
            warn!(
                "event=item_insert module=repo status=error reason=duplicate_id item_id={}",
                item.id
            );
            return Err(RepoError::DuplicateId(item.id));
        }

        state.items.insert(0, item.clone());
        state.revision += 1;
        debug!(
            "event=item_insert module=repo status=ok item_id={} revision={} count={}",
            item.id,
            state.revision,
            state.items.len()
        );
        Ok(item.id)
    }

    fn replace(&self, item: &Item) -> RepoResult<Item> {
        item.validate()?;

        let mut state = self.write()?;
        let position = state.position(item.id)?;
        Ok(state.store_at(position, item.clone()))
    }

    fn modify<F>(&self, id: ItemId, change: F) -> RepoResult<Item>
    where
        F: FnOnce(&mut Item) -> Result<(), ItemValidationError>,
    {
        let mut state = self.write()?;
        let position = state.position(id)?;

        let mut updated = state.items[position].clone();
        change(&mut updated)?;
        updated.id = id;
        updated.validate()?;
        Ok(state.store_at(position, updated))
    }

    fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let state = self.read()?;
        Ok(state.items.iter().find(|item| item.id == id).cloned())
    }

    fn snapshot(&self) -> RepoResult<VaultSnapshot> {
        let state = self.read()?;
        Ok(VaultSnapshot {
            revision: state.revision,
            items: state.items.clone(),
        })
    }
}
