//! Persistence for todo records.
//!
//! Handlers only ever see `Arc<dyn TodoStore>`; which implementation sits
//! behind it is decided once at startup from the configured connection URL.

mod memory;
pub mod providers;
mod sql;

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

pub use memory::MemoryTodoStore;
pub use sql::SqlTodoStore;

use crate::{
    config::DatabaseConfig,
    todo::{Todo, TodoPatch, ValidationError},
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("todo not found (id={0})")]
    NotFound(Uuid),
    #[error("store backend failed: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend(err: impl Into<BoxError>) -> Self {
        Self::Backend(err.into())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, newest first.
    async fn list(&self) -> StoreResult<Vec<Todo>>;

    /// Persists a new, uncompleted todo. Blank text is rejected before
    /// anything is written.
    async fn create(&self, text: &str) -> StoreResult<Todo>;

    /// Applies the supplied fields and refreshes `updated_at`, even when the
    /// patch is empty.
    async fn update(&self, id: Uuid, patch: TodoPatch) -> StoreResult<Todo>;

    async fn delete(&self, id: Uuid) -> StoreResult<()>;
}

/// Opens the store matching `cfg.url`.
pub async fn connect(cfg: &DatabaseConfig) -> anyhow::Result<Arc<dyn TodoStore>> {
    let providers = providers::default_registry()?;
    let provider = providers.provider_for_url(&cfg.url)?;
    tracing::info!(backend = provider.id().as_str(), "connecting todo store");
    provider.connect(cfg).await
}
