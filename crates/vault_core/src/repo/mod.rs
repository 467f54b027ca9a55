//! Repository layer: the vault store.
//!
//! # Responsibility
//! - Define the storage contract consumed by the service layer.
//! - Own the ordered item sequence behind an explicit lock.
//!
//! # Invariants
//! - Repository writes must enforce `Item::validate()` before mutation.
//! - Repository APIs return semantic errors (`NotFound`, `DuplicateId`)
//!   instead of silently ignoring a miss.

pub mod item_repo;
