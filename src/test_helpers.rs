use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use uuid::Uuid;

use crate::{
    config::AppConfig,
    routes::app,
    state::AppState,
    store::{MemoryTodoStore, StoreError, StoreResult, TodoStore},
    todo::{Todo, TodoPatch},
};

/// A store whose every call fails, as if the database were unreachable.
pub struct FailingTodoStore;

#[async_trait]
impl TodoStore for FailingTodoStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        Err(StoreError::backend("store unavailable"))
    }

    async fn create(&self, _text: &str) -> StoreResult<Todo> {
        Err(StoreError::backend("store unavailable"))
    }

    async fn update(&self, _id: Uuid, _patch: TodoPatch) -> StoreResult<Todo> {
        Err(StoreError::backend("store unavailable"))
    }

    async fn delete(&self, _id: Uuid) -> StoreResult<()> {
        Err(StoreError::backend("store unavailable"))
    }
}

pub fn test_router_with_store(store: Arc<dyn TodoStore>) -> Router {
    let state = AppState::new(AppConfig::default(), store);
    app(state)
}

pub fn test_router() -> Router {
    test_router_with_store(Arc::new(MemoryTodoStore::new()))
}
