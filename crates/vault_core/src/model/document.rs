//! Attachments owned by an item: documents and service history.
//!
//! # Invariants
//! - Attachments have no lifecycle outside their parent `Item`.
//! - `ServiceRecord::cost`, when set, is a non-negative exact decimal.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type DocumentId = Uuid;
pub type ServiceRecordId = Uuid;

/// Closed set of document categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Receipt,
    Warranty,
    Manual,
    Other,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [Self::Receipt, Self::Warranty, Self::Manual, Self::Other];

    /// Stable lowercase key, matching the serialized form.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Receipt => "receipt",
            Self::Warranty => "warranty",
            Self::Manual => "manual",
            Self::Other => "other",
        }
    }

    /// Parses a key case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_key() == normalized)
    }
}

/// Receipt, warranty card, manual or other scan attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub title: String,
    pub kind: DocumentKind,
    pub date: DateTime<Utc>,
    /// Opaque handle to the stored file; resolved by the platform layer.
    pub location: Option<String>,
}

impl Document {
    /// Creates a document with a generated ID and no location.
    pub fn new(title: impl Into<String>, kind: DocumentKind, date: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            date,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// One repair or service event in an item's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub id: ServiceRecordId,
    pub date: DateTime<Utc>,
    pub note: String,
    pub cost: Option<Decimal>,
    pub documents: Vec<Document>,
}

impl ServiceRecord {
    /// Creates a service record with a generated ID, no cost and no documents.
    pub fn new(date: DateTime<Utc>, note: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            note: note.into(),
            cost: None,
            documents: Vec::new(),
        }
    }

    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.cost = Some(cost);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentKind;

    #[test]
    fn document_kind_parse_is_case_insensitive() {
        assert_eq!(DocumentKind::parse(" Receipt "), Some(DocumentKind::Receipt));
        assert_eq!(DocumentKind::parse("MANUAL"), Some(DocumentKind::Manual));
        assert_eq!(DocumentKind::parse("invoice"), None);
    }
}
