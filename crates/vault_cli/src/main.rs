//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `vault_core` linkage.
//! - Print the sample vault, optionally narrowed by a name search.
//!
//! Usage: `vault_cli [search text]`

use vault_core::{InMemoryItemRepository, ItemFilter, VaultService};

fn main() {
    println!("vault_core ping={}", vault_core::ping());
    println!("vault_core version={}", vault_core::core_version());

    let search = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let service = VaultService::new(InMemoryItemRepository::new());
    let items = service
        .seed_sample_data()
        .and_then(|_| service.filter_items(&ItemFilter::new(search)));

    match items {
        Ok(items) => {
            let now = service.now();
            for item in items {
                println!(
                    "{} | {} | warranty={:?}",
                    item.name,
                    item.collection,
                    item.warranty_status_at(now)
                );
            }
        }
        Err(err) => {
            eprintln!("vault_cli failed: {err}");
            std::process::exit(1);
        }
    }
}
