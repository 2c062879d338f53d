use chrono::NaiveDate;
use logmanager::db::Store;
use logmanager::domain::{EntryId, PageRequest};
use logmanager::models::{LogEntryDraft, LogEntryFields};
use logmanager::services::seed::seed_sample_entries;
use logmanager::services::{
    LogEntryError, LogEntryService, NameRegistrationHook, PostCreateHook, SeaOrmLogEntryService,
};
use std::sync::{Arc, Mutex};

async fn memory_store() -> Store {
    Store::new("sqlite::memory:")
        .await
        .expect("Failed to open in-memory store")
}

struct FailingHook;

#[async_trait::async_trait]
impl PostCreateHook for FailingHook {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn after_create(&self, _id: EntryId, _fields: &LogEntryFields) -> anyhow::Result<()> {
        anyhow::bail!("search index unavailable")
    }
}

#[derive(Default)]
struct RecordingHook {
    seen: Mutex<Vec<(EntryId, String)>>,
}

#[async_trait::async_trait]
impl PostCreateHook for RecordingHook {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn after_create(&self, id: EntryId, fields: &LogEntryFields) -> anyhow::Result<()> {
        self.seen.lock().unwrap().push((id, fields.name.clone()));
        Ok(())
    }
}

#[tokio::test]
async fn test_failing_hook_does_not_fail_create() {
    let store = memory_store().await;
    let recorder = Arc::new(RecordingHook::default());
    let service = SeaOrmLogEntryService::new(store.clone())
        .with_hook(Arc::new(FailingHook))
        .with_hook(Arc::new(NameRegistrationHook::new(store.clone())))
        .with_hook(recorder.clone());

    let id = service
        .create(LogEntryDraft::new("Ann", "Opened valve", "2026-10-18", "Tank 2"))
        .await
        .unwrap();

    let entry = service.get(id).await.unwrap();
    assert_eq!(entry.name, "Ann");
    assert!(entry.active);

    // Later hooks still ran.
    assert_eq!(service.list_names().await.unwrap(), vec!["Ann"]);
    assert_eq!(
        recorder.seen.lock().unwrap().as_slice(),
        &[(id, "Ann".to_string())]
    );
}

#[tokio::test]
async fn test_hooks_skip_rejected_creates() {
    let store = memory_store().await;
    let recorder = Arc::new(RecordingHook::default());
    let service = SeaOrmLogEntryService::new(store).with_hook(recorder.clone());

    let err = service
        .create(LogEntryDraft::new("Ann", "", "2026-10-18", "Tank 2"))
        .await
        .unwrap_err();

    assert!(matches!(err, LogEntryError::Validation(_)));
    assert!(recorder.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_entries_are_not_found() {
    let service = SeaOrmLogEntryService::new(memory_store().await);
    let draft = LogEntryDraft::new("Ann", "d", "2026-10-18", "l");

    assert!(matches!(
        service.update(EntryId::new(42), draft).await,
        Err(LogEntryError::NotFound(_))
    ));
    assert!(matches!(
        service.soft_delete(EntryId::new(42)).await,
        Err(LogEntryError::NotFound(_))
    ));
    assert!(matches!(
        service.get(EntryId::new(42)).await,
        Err(LogEntryError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_seeding_only_fills_an_empty_table() {
    let store = memory_store().await;
    let service = SeaOrmLogEntryService::new(store.clone())
        .with_hook(Arc::new(NameRegistrationHook::new(store.clone())));
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    assert_eq!(seed_sample_entries(&store, &service, 7, today).await.unwrap(), 7);
    assert_eq!(seed_sample_entries(&store, &service, 7, today).await.unwrap(), 0);

    let page = service.list_page(PageRequest::new(1, 10)).await.unwrap();
    assert_eq!(page.total, 7);
    assert_eq!(page.total_pages, 1);

    let newest = &page.items[0];
    assert_eq!(newest.name, "Name 6");
    assert_eq!(newest.date, "2026-10-12");

    let oldest = &page.items[6];
    assert_eq!(oldest.name, "Name 0");
    assert_eq!(oldest.date, "2026-10-18");

    assert_eq!(service.list_names().await.unwrap().len(), 7);
}

#[tokio::test]
async fn test_soft_deleted_rows_block_reseeding() {
    let store = memory_store().await;
    let service = SeaOrmLogEntryService::new(store.clone());
    let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

    let id = service
        .create(LogEntryDraft::new("Ann", "d", "2026-10-18", "l"))
        .await
        .unwrap();
    service.soft_delete(id).await.unwrap();

    assert_eq!(seed_sample_entries(&store, &service, 7, today).await.unwrap(), 0);

    let page = service.list_page(PageRequest::default()).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(!service.get(id).await.unwrap().active);
}
