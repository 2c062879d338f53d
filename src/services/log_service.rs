//! Domain service for log entries.
//!
//! The HTTP layer talks to storage only through [`LogEntryService`], so the
//! `SeaORM` implementation can be swapped for a double in tests.

use crate::domain::{EntryId, InvalidEntryId, Page, PageRequest};
use crate::models::{LogEntry, LogEntryDraft, LogEntryFields};
use thiserror::Error;
use tracing::debug;

pub const MISSING_FIELDS: &str = "Missing required fields";

/// Errors specific to log entry operations.
#[derive(Debug, Error)]
pub enum LogEntryError {
    #[error("{0}")]
    Validation(String),

    #[error("Invalid ID")]
    InvalidId(String),

    /// Carries the identifier as the client wrote it.
    #[error("Log entry not found")]
    NotFound(String),

    #[error("{0}")]
    Database(String),
}

impl LogEntryError {
    #[must_use]
    pub fn not_found(id: EntryId) -> Self {
        Self::NotFound(id.to_string())
    }

    /// The client only sees the fixed message; the field names go to the log.
    #[must_use]
    pub fn missing_fields(fields: &[&str]) -> Self {
        debug!(missing = ?fields, "Rejected incomplete log entry");
        Self::Validation(MISSING_FIELDS.to_string())
    }
}

impl From<InvalidEntryId> for LogEntryError {
    fn from(err: InvalidEntryId) -> Self {
        match err {
            InvalidEntryId::NotNumeric(raw) => Self::InvalidId(raw),
            InvalidEntryId::NoSuchRow(raw) => Self::NotFound(raw),
        }
    }
}

impl From<sea_orm::DbErr> for LogEntryError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<anyhow::Error> for LogEntryError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

/// Checks the required fields, reporting the missing ones as a validation error.
pub fn validate_draft(draft: LogEntryDraft) -> Result<LogEntryFields, LogEntryError> {
    draft
        .into_fields()
        .map_err(|missing| LogEntryError::missing_fields(&missing))
}

/// Domain service trait for log entries.
#[async_trait::async_trait]
pub trait LogEntryService: Send + Sync {
    /// One page of active entries, most recently updated first.
    async fn list_page(&self, request: PageRequest) -> Result<Page<LogEntry>, LogEntryError>;

    /// Inserts a new active entry and runs the post-create hooks.
    async fn create(&self, draft: LogEntryDraft) -> Result<EntryId, LogEntryError>;

    /// Overwrites the editable fields of an existing (active or not) entry.
    async fn update(&self, id: EntryId, draft: LogEntryDraft) -> Result<u64, LogEntryError>;

    /// Marks an existing entry inactive.
    async fn soft_delete(&self, id: EntryId) -> Result<u64, LogEntryError>;

    /// Looks up any entry, including soft-deleted ones.
    async fn get(&self, id: EntryId) -> Result<LogEntry, LogEntryError>;

    /// Every registered name, for suggestion lists.
    async fn list_names(&self) -> Result<Vec<String>, LogEntryError>;
}

/// Side effect run after a new entry has been written.
///
/// Failures are logged by the caller and never undo or fail the create.
#[async_trait::async_trait]
pub trait PostCreateHook: Send + Sync {
    fn name(&self) -> &'static str;

    async fn after_create(&self, id: EntryId, fields: &LogEntryFields) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_reports_fixed_message() {
        let err = validate_draft(LogEntryDraft {
            name: Some("Ann".to_string()),
            ..Default::default()
        })
        .unwrap_err();

        assert!(matches!(err, LogEntryError::Validation(_)));
        assert_eq!(err.to_string(), MISSING_FIELDS);
    }

    #[test]
    fn anyhow_errors_keep_their_cause() {
        let err: LogEntryError = anyhow::anyhow!("disk I/O error")
            .context("Failed to list usernames")
            .into();
        assert_eq!(
            err.to_string(),
            "Failed to list usernames: disk I/O error"
        );
    }
}
