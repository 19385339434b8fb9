use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::registry::{StoreProvider, StoreProviderId};
use crate::{
    config::DatabaseConfig,
    db::connection,
    store::{SqlTodoStore, TodoStore},
};

pub struct PostgresStoreProvider;

#[async_trait]
impl StoreProvider for PostgresStoreProvider {
    fn id(&self) -> StoreProviderId {
        StoreProviderId::Postgres
    }

    fn supports_url(&self, url: &str) -> bool {
        let normalized = url.trim().to_ascii_lowercase();
        normalized.starts_with("postgres://") || normalized.starts_with("postgresql://")
    }

    async fn connect(&self, cfg: &DatabaseConfig) -> Result<Arc<dyn TodoStore>> {
        let db = connection::open(cfg).await?;
        connection::sync_schema(&db).await?;
        Ok(Arc::new(SqlTodoStore::new(&db)))
    }
}
