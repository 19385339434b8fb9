use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use super::registry::{StoreProvider, StoreProviderId};
use crate::{
    config::DatabaseConfig,
    store::{MemoryTodoStore, TodoStore},
};

pub struct MemoryStoreProvider;

#[async_trait]
impl StoreProvider for MemoryStoreProvider {
    fn id(&self) -> StoreProviderId {
        StoreProviderId::Memory
    }

    fn supports_url(&self, url: &str) -> bool {
        url.trim().to_ascii_lowercase().starts_with("memory:")
    }

    async fn connect(&self, _cfg: &DatabaseConfig) -> Result<Arc<dyn TodoStore>> {
        tracing::warn!("using in-memory todo store; data is lost on restart");
        Ok(Arc::new(MemoryTodoStore::new()))
    }
}
