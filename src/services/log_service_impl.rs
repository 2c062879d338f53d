//! `SeaORM` implementation of the `LogEntryService` trait.

use crate::db::Store;
use crate::domain::{EntryId, Page, PageRequest};
use crate::models::{LogEntry, LogEntryDraft, LogEntryFields};
use crate::services::log_service::{
    LogEntryError, LogEntryService, PostCreateHook, validate_draft,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct SeaOrmLogEntryService {
    store: Store,
    hooks: Vec<Arc<dyn PostCreateHook>>,
}

impl SeaOrmLogEntryService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self {
            store,
            hooks: Vec::new(),
        }
    }

    /// Registers a hook; hooks run in registration order.
    #[must_use]
    pub fn with_hook(mut self, hook: Arc<dyn PostCreateHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    /// Fails with `NotFound` unless a row with this id exists, active or not.
    async fn ensure_exists(&self, id: EntryId) -> Result<(), LogEntryError> {
        debug!(%id, "Validating ID");
        match self.store.get_entry(id).await? {
            Some(_) => Ok(()),
            None => Err(LogEntryError::not_found(id)),
        }
    }

    async fn run_post_create_hooks(&self, id: EntryId, fields: &LogEntryFields) {
        for hook in &self.hooks {
            if let Err(e) = hook.after_create(id, fields).await {
                warn!(hook = hook.name(), %id, error = %format!("{e:#}"), "Post-create hook failed");
            }
        }
    }
}

#[async_trait]
impl LogEntryService for SeaOrmLogEntryService {
    async fn list_page(&self, request: PageRequest) -> Result<Page<LogEntry>, LogEntryError> {
        debug!(
            page = request.page,
            limit = request.limit,
            offset = request.offset(),
            "Fetching log entries"
        );

        let (entries, total) = self.store.list_active_entries(request).await?;
        Ok(Page::new(entries, total, request))
    }

    async fn create(&self, draft: LogEntryDraft) -> Result<EntryId, LogEntryError> {
        let fields = validate_draft(draft)?;

        let id = self.store.insert_entry(&fields).await?;
        metrics::counter!("log_entries_created_total").increment(1);
        info!(%id, name = %fields.name, "Created log entry");

        self.run_post_create_hooks(id, &fields).await;

        Ok(id)
    }

    async fn update(&self, id: EntryId, draft: LogEntryDraft) -> Result<u64, LogEntryError> {
        let fields = validate_draft(draft)?;
        self.ensure_exists(id).await?;

        let changes = self.store.update_entry(id, &fields).await?;
        info!(%id, changes, "Updated log entry");

        Ok(changes)
    }

    async fn soft_delete(&self, id: EntryId) -> Result<u64, LogEntryError> {
        self.ensure_exists(id).await?;

        let changes = self.store.deactivate_entry(id).await?;
        info!(%id, changes, "Deactivated log entry");

        Ok(changes)
    }

    async fn get(&self, id: EntryId) -> Result<LogEntry, LogEntryError> {
        self.store
            .get_entry(id)
            .await?
            .ok_or_else(|| LogEntryError::not_found(id))
    }

    async fn list_names(&self) -> Result<Vec<String>, LogEntryError> {
        Ok(self.store.list_usernames().await?)
    }
}
