use std::sync::Arc;

use crate::config::Config;
use crate::db::Store;
use crate::services::{LogEntryService, NameRegistrationHook, SeaOrmLogEntryService, seed};

#[derive(Clone)]
pub struct SharedState {
    pub config: Arc<Config>,

    pub log_entries: Arc<dyn LogEntryService>,
}

impl SharedState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store = Store::with_pool_options(
            &config.general.database_path,
            config.general.max_db_connections,
            config.general.min_db_connections,
        )
        .await?;

        let log_entries = Arc::new(
            SeaOrmLogEntryService::new(store.clone())
                .with_hook(Arc::new(NameRegistrationHook::new(store.clone()))),
        ) as Arc<dyn LogEntryService>;

        if config.seed.enabled {
            let today = chrono::Local::now().date_naive();
            seed::seed_sample_entries(
                &store,
                log_entries.as_ref(),
                config.seed.sample_entries,
                today,
            )
            .await?;
        }

        Ok(Self {
            config: Arc::new(config),
            log_entries,
        })
    }
}
