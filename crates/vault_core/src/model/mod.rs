//! Vault domain model for owned items and their attachments.
//!
//! # Responsibility
//! - Define canonical data structures used by store and service logic.
//! - Keep derived state (warranty status) computed, never stored.
//!
//! # Invariants
//! - Every item is identified by a stable `ItemId`.
//! - Money values are exact decimals, never binary floating point.
//! - Documents and service records are owned by exactly one item.

pub mod document;
pub mod item;
pub mod money;
