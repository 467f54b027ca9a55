//! Item search and filtering.
//!
//! # Responsibility
//! - Provide the name/collection predicate used by list views.
//! - Keep filtering a linear, order-preserving scan over store snapshots.

pub mod filter;
