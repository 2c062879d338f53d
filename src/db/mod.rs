use crate::domain::{EntryId, PageRequest};
use crate::models::{LogEntry, LogEntryFields};
use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

fn is_memory_url(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let in_memory = is_memory_url(db_url);

        if !in_memory {
            let path_str = db_url
                .trim_start_matches("sqlite://")
                .trim_start_matches("sqlite:");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        // An in-memory database lives only as long as its connection.
        let (max_connections, min_connections) = if in_memory {
            (1, 1)
        } else {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
            (max_connections, min_connections.min(max_connections))
        };
        opt.max_connections(max_connections)
            .min_connections(min_connections);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn log_entry_repo(&self) -> repositories::log_entry::LogEntryRepository {
        repositories::log_entry::LogEntryRepository::new(self.conn.clone())
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    /// Active entries for one page, newest update first, plus the active total.
    pub async fn list_active_entries(&self, request: PageRequest) -> Result<(Vec<LogEntry>, u64)> {
        let repo = self.log_entry_repo();
        let rows = repo
            .list_active(request.offset(), request.bounded_limit())
            .await?;
        let total = repo.count_active().await?;

        Ok((rows.into_iter().map(LogEntry::from).collect(), total))
    }

    pub async fn count_all_entries(&self) -> Result<u64> {
        self.log_entry_repo().count_all().await
    }

    pub async fn get_entry(&self, id: EntryId) -> Result<Option<LogEntry>> {
        Ok(self
            .log_entry_repo()
            .get(id.value())
            .await?
            .map(LogEntry::from))
    }

    pub async fn insert_entry(&self, fields: &LogEntryFields) -> Result<EntryId> {
        self.log_entry_repo()
            .insert(fields)
            .await
            .map(EntryId::new)
    }

    pub async fn update_entry(&self, id: EntryId, fields: &LogEntryFields) -> Result<u64> {
        self.log_entry_repo().update(id.value(), fields).await
    }

    pub async fn deactivate_entry(&self, id: EntryId) -> Result<u64> {
        self.log_entry_repo().deactivate(id.value()).await
    }

    pub async fn register_username(&self, username: &str) -> Result<bool> {
        self.user_repo().register(username).await
    }

    pub async fn list_usernames(&self) -> Result<Vec<String>> {
        self.user_repo().list_usernames().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_are_detected() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file:test?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite:data/logmanager.db"));
    }

    #[tokio::test]
    async fn insert_and_read_back() {
        let store = Store::new("sqlite::memory:").await.unwrap();

        let fields = LogEntryFields {
            name: "Ann".to_string(),
            description: "Checked the gauges".to_string(),
            date: "2026-10-18".to_string(),
            location: "Pump house".to_string(),
        };
        let id = store.insert_entry(&fields).await.unwrap();

        let entry = store.get_entry(id).await.unwrap().unwrap();
        assert_eq!(entry.name, "Ann");
        assert!(entry.active);
        assert_eq!(entry.created_at, entry.updated_at);
        assert_eq!(store.count_all_entries().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deactivated_entries_are_not_listed() {
        let store = Store::new("sqlite::memory:").await.unwrap();
        let fields = LogEntryFields {
            name: "Bo".to_string(),
            description: "d".to_string(),
            date: "2026-10-18".to_string(),
            location: "l".to_string(),
        };
        let keep = store.insert_entry(&fields).await.unwrap();
        let gone = store.insert_entry(&fields).await.unwrap();

        assert_eq!(store.deactivate_entry(gone).await.unwrap(), 1);

        let (rows, total) = store
            .list_active_entries(PageRequest::default())
            .await
            .unwrap();
        assert_eq!(total, 1);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, keep);

        let hidden = store.get_entry(gone).await.unwrap().unwrap();
        assert!(!hidden.active);
        assert_eq!(store.count_all_entries().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn usernames_are_unique() {
        let store = Store::new("sqlite::memory:").await.unwrap();

        assert!(store.register_username("Ann").await.unwrap());
        assert!(!store.register_username("Ann").await.unwrap());
        assert!(store.register_username("Bo").await.unwrap());

        assert_eq!(store.list_usernames().await.unwrap(), vec!["Ann", "Bo"]);
    }
}
