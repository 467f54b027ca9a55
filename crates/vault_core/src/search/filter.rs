//! Name search and collection filtering over item sequences.
//!
//! # Invariants
//! - Search text is trimmed; whitespace-only text matches everything.
//! - Name matching is a case-insensitive substring test.
//! - Results keep the input order; there is no pagination.

use crate::model::item::{Collection, Item};

/// Combined search text and collection filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Free-text name search.
    pub text: String,
    /// Exact collection match when set.
    pub collection: Option<Collection>,
}

impl ItemFilter {
    /// Creates a text-only filter.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            collection: None,
        }
    }

    /// Creates a collection-only filter.
    pub fn collection(collection: Collection) -> Self {
        Self {
            text: String::new(),
            collection: Some(collection),
        }
    }

    pub fn with_collection(mut self, collection: Option<Collection>) -> Self {
        self.collection = collection;
        self
    }

    /// Whether this filter lets every item through.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty() && self.collection.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.matches_with_needle(item, &self.needle())
    }

    fn needle(&self) -> String {
        self.text.trim().to_lowercase()
    }

    fn matches_with_needle(&self, item: &Item, needle: &str) -> bool {
        let name_ok = needle.is_empty() || item.name.to_lowercase().contains(needle);
        let collection_ok = match self.collection {
            Some(collection) => item.collection == collection,
            None => true,
        };
        name_ok && collection_ok
    }
}

/// Returns the items accepted by `filter`, in input order.
pub fn filter_items<'a>(items: &'a [Item], filter: &ItemFilter) -> Vec<&'a Item> {
    let needle = filter.needle();
    items
        .iter()
        .filter(|item| filter.matches_with_needle(item, &needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_items, ItemFilter};
    use crate::model::item::{Collection, Item};
    use chrono::Utc;

    #[test]
    fn whitespace_search_matches_everything() {
        let item = Item::new("Lamp", Collection::HomeAndFurniture, Utc::now());
        assert!(ItemFilter::new("   ").matches(&item));
        assert!(ItemFilter::new("  ").is_empty());
    }

    #[test]
    fn search_matches_unicode_case_insensitively() {
        let items = vec![
            Item::new("Échelle télescopique", Collection::Tools, Utc::now()),
            Item::new("Tent", Collection::Outdoor, Utc::now()),
        ];
        let hits = filter_items(&items, &ItemFilter::new("ÉCHELLE"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Échelle télescopique");
    }

    #[test]
    fn collection_filter_is_exact_and_optional() {
        let items = vec![
            Item::new("Drill", Collection::Tools, Utc::now()),
            Item::new("Drill bag", Collection::Outdoor, Utc::now()),
        ];
        let any = ItemFilter::new("drill").with_collection(None);
        assert_eq!(filter_items(&items, &any).len(), 2);

        let tools = ItemFilter::new("drill").with_collection(Some(Collection::Tools));
        let hits = filter_items(&items, &tools);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].collection, Collection::Tools);
    }
}
