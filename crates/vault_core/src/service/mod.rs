//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own input normalization so UI/FFI layers never re-implement it.

pub mod vault_service;
