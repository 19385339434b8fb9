use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use super::{StoreError, StoreResult, TodoStore};
use crate::{
    db::dao::{DaoBase, DaoLayerError, TodoDao},
    todo::{Todo, TodoPatch, normalize_text},
};

/// `TodoStore` over a sea-orm connection (Postgres or SQLite).
#[derive(Clone)]
pub struct SqlTodoStore {
    dao: TodoDao,
}

impl SqlTodoStore {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self {
            dao: TodoDao::new(db),
        }
    }
}

impl From<DaoLayerError> for StoreError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { id, .. } => StoreError::NotFound(id),
            DaoLayerError::Db(db_err) => StoreError::backend(db_err),
        }
    }
}

#[async_trait]
impl TodoStore for SqlTodoStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let models = self.dao.list_todos().await?;
        Ok(models.into_iter().map(Todo::from).collect())
    }

    async fn create(&self, text: &str) -> StoreResult<Todo> {
        let text = normalize_text(text)?;
        let model = self.dao.create_todo(text).await?;
        Ok(model.into())
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> StoreResult<Todo> {
        let TodoPatch { text, completed } = patch.normalized()?;
        let model = self.dao.update_todo(&id, text, completed).await?;
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        Ok(self.dao.delete_todo(&id).await?)
    }
}
