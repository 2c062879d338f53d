//! List entries command handler

use crate::config::Config;
use crate::db::Store;
use crate::domain::PageRequest;
use crate::services::{LogEntryService, SeaOrmLogEntryService};

pub async fn cmd_list_entries(config: &Config, page: u64, limit: Option<u64>) -> anyhow::Result<()> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;
    let service = SeaOrmLogEntryService::new(store);

    let request = PageRequest::new(page, limit.unwrap_or(config.pagination.default_limit));
    let result = service.list_page(request).await?;

    if result.items.is_empty() {
        println!("No log entries on page {}.", result.page);
        println!("Total active entries: {}", result.total);
        return Ok(());
    }

    println!(
        "Log entries - page {} of {} ({} total)",
        result.page, result.total_pages, result.total
    );
    println!("{:-<70}", "");

    for entry in result.items {
        println!("[{}] {} @ {} on {}", entry.id, entry.name, entry.location, entry.date);
        println!("  {}", entry.description);
        println!("  updated {}", entry.updated_at);
    }

    Ok(())
}
