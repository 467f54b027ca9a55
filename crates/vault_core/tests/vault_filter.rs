use chrono::{TimeZone, Utc};
use vault_core::{
    filter_items, Collection, InMemoryItemRepository, ItemDraft, ItemFilter, VaultService,
};

fn service_with(names: &[(&str, Collection)]) -> VaultService<InMemoryItemRepository> {
    let service = VaultService::with_clock(InMemoryItemRepository::new(), || {
        Utc.with_ymd_and_hms(2026, 1, 28, 8, 0, 0).unwrap()
    });
    for (name, collection) in names {
        service
            .create_item(ItemDraft::new(*name, *collection))
            .unwrap();
    }
    service
}

fn names(items: &[vault_core::Item]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn search_is_case_insensitive_substring_on_name() {
    let service = service_with(&[
        ("Espresso Pro", Collection::Appliances),
        ("Headphones", Collection::Audio),
    ]);

    let hits = service.filter_items(&ItemFilter::new("pro")).unwrap();
    assert_eq!(names(&hits), vec!["Espresso Pro"]);

    let hits = service.filter_items(&ItemFilter::new("PHONE")).unwrap();
    assert_eq!(names(&hits), vec!["Headphones"]);
}

#[test]
fn collection_filter_is_exact_match() {
    let service = service_with(&[
        ("Espresso Pro", Collection::Appliances),
        ("Headphones", Collection::Audio),
    ]);

    let hits = service
        .filter_items(&ItemFilter::collection(Collection::Audio))
        .unwrap();
    assert_eq!(names(&hits), vec!["Headphones"]);

    let hits = service
        .filter_items(&ItemFilter::new("").with_collection(Some(Collection::Appliances)))
        .unwrap();
    assert_eq!(names(&hits), vec!["Espresso Pro"]);

    let hits = service
        .filter_items(&ItemFilter::collection(Collection::Tools))
        .unwrap();
    assert!(hits.is_empty());
}

#[test]
fn search_and_collection_combine_with_and() {
    let service = service_with(&[
        ("Pro Drill", Collection::Tools),
        ("Espresso Pro", Collection::Appliances),
        ("Headphones", Collection::Audio),
    ]);

    let hits = service
        .filter_items(&ItemFilter::new("pro").with_collection(Some(Collection::Tools)))
        .unwrap();
    assert_eq!(names(&hits), vec!["Pro Drill"]);
}

#[test]
fn empty_filter_returns_everything_newest_first() {
    let service = service_with(&[
        ("First", Collection::Other),
        ("Second", Collection::Tech),
        ("Third", Collection::Other),
    ]);

    let hits = service.filter_items(&ItemFilter::default()).unwrap();
    assert_eq!(names(&hits), vec!["Third", "Second", "First"]);

    let others = service
        .filter_items(&ItemFilter::collection(Collection::Other))
        .unwrap();
    assert_eq!(names(&others), vec!["Third", "First"]);
}

#[test]
fn filter_items_over_seeded_snapshot_preserves_order() {
    let service = VaultService::new(InMemoryItemRepository::new());
    service.seed_sample_data().unwrap();
    let snapshot = service.snapshot().unwrap();

    let hits = filter_items(&snapshot.items, &ItemFilter::new("pro"));
    let hit_names: Vec<&str> = hits.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(hit_names, vec!["Espresso Pro"]);

    let all = filter_items(&snapshot.items, &ItemFilter::new("  "));
    assert_eq!(all.len(), snapshot.items.len());
}
