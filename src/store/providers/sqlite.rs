use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use sea_orm::ConnectionTrait;

use super::registry::{StoreProvider, StoreProviderId};
use crate::{
    config::DatabaseConfig,
    db::connection,
    store::{SqlTodoStore, TodoStore},
};

const SQLITE_BUSY_TIMEOUT_MS: u64 = 5_000;

pub struct SqliteStoreProvider;

#[async_trait]
impl StoreProvider for SqliteStoreProvider {
    fn id(&self) -> StoreProviderId {
        StoreProviderId::Sqlite
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("sqlite:")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<Arc<dyn TodoStore>> {
        let db = connection::open(cfg).await?;
        db.execute_unprepared(&format!("PRAGMA busy_timeout = {SQLITE_BUSY_TIMEOUT_MS}"))
            .await?;
        connection::sync_schema(&db).await?;
        Ok(Arc::new(SqlTodoStore::new(&db)))
    }
}
