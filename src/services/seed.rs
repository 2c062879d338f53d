use crate::db::Store;
use crate::models::LogEntryDraft;
use crate::services::log_service::LogEntryService;
use anyhow::Result;
use chrono::{Days, NaiveDate};
use tracing::info;

/// Sample entry `index`, dated `index` days before `today`.
#[must_use]
pub fn sample_entry(index: u64, today: NaiveDate) -> LogEntryDraft {
    let date = today.checked_sub_days(Days::new(index)).unwrap_or(today);

    LogEntryDraft::new(
        &format!("Name {index}"),
        &format!("Description {index}"),
        &date.format("%Y-%m-%d").to_string(),
        &format!("Location {index}"),
    )
}

/// Inserts `count` sample entries through the service, so their names are
/// registered too. Does nothing once the table holds any row.
pub async fn seed_sample_entries(
    store: &Store,
    service: &dyn LogEntryService,
    count: u64,
    today: NaiveDate,
) -> Result<u64> {
    if count == 0 || store.count_all_entries().await? > 0 {
        return Ok(0);
    }

    for index in 0..count {
        service.create(sample_entry(index, today)).await?;
    }

    info!(count, "Database initialized with sample data");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_entries_count_back_from_today() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        let first = sample_entry(0, today).into_fields().unwrap();
        assert_eq!(first.name, "Name 0");
        assert_eq!(first.date, "2026-03-02");

        let third = sample_entry(2, today).into_fields().unwrap();
        assert_eq!(third.description, "Description 2");
        assert_eq!(third.location, "Location 2");
        assert_eq!(third.date, "2026-02-28");
    }
}
