use crate::db::Store;
use crate::domain::EntryId;
use crate::models::LogEntryFields;
use crate::services::log_service::PostCreateHook;
use async_trait::async_trait;
use tracing::debug;

/// Records the entry's name in the `users` lookup table.
pub struct NameRegistrationHook {
    store: Store,
}

impl NameRegistrationHook {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PostCreateHook for NameRegistrationHook {
    fn name(&self) -> &'static str {
        "name_registration"
    }

    async fn after_create(&self, id: EntryId, fields: &LogEntryFields) -> anyhow::Result<()> {
        let inserted = self.store.register_username(&fields.name).await?;
        if inserted {
            debug!(%id, username = %fields.name, "Registered new username");
        }
        Ok(())
    }
}
