use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{AppError, FieldErrors},
    store::{StoreError, TodoStore},
    todo::{Todo, TodoPatch},
};

pub const TODO_NOT_FOUND: &str = "Todo not found";

#[derive(Clone, Copy)]
pub enum TodoOp {
    List,
    Create,
    Update,
    Delete,
}

impl TodoOp {
    fn failure_context(self) -> &'static str {
        match self {
            TodoOp::List => "List todos failed",
            TodoOp::Create => "Create todo failed",
            TodoOp::Update => "Update todo failed",
            TodoOp::Delete => "Delete todo failed",
        }
    }
}

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    fn map_error(&self, op: TodoOp, err: StoreError) -> AppError {
        match err {
            // a create only ever carries `text`, so the message is enough
            StoreError::Validation(err) if matches!(op, TodoOp::Create) => {
                AppError::bad_request(err.reason)
            }
            StoreError::Validation(err) => {
                let mut fields = FieldErrors::new();
                fields.insert(err.field.to_string(), err.reason.to_string());
                AppError::validation(fields)
            }
            StoreError::NotFound(_) => AppError::not_found(TODO_NOT_FOUND),
            StoreError::Backend(source) => {
                AppError::internal_with_source(op.failure_context(), source)
            }
        }
    }

    pub async fn list(&self) -> Result<Vec<Todo>, AppError> {
        self.store
            .list()
            .await
            .map_err(|err| self.map_error(TodoOp::List, err))
    }

    pub async fn create(&self, text: &str) -> Result<Todo, AppError> {
        let todo = self
            .store
            .create(text)
            .await
            .map_err(|err| self.map_error(TodoOp::Create, err))?;
        tracing::debug!(id = %todo.id, "todo created");
        Ok(todo)
    }

    pub async fn update(&self, id: Uuid, patch: TodoPatch) -> Result<Todo, AppError> {
        if patch.is_empty() {
            tracing::debug!(%id, "empty update only refreshes updatedAt");
        }
        self.store
            .update(id, patch)
            .await
            .map_err(|err| self.map_error(TodoOp::Update, err))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.store
            .delete(id)
            .await
            .map_err(|err| self.map_error(TodoOp::Delete, err))?;
        tracing::debug!(%id, "todo deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use uuid::Uuid;

    use super::{TODO_NOT_FOUND, TodoService};
    use crate::{
        error::AppError,
        store::MemoryTodoStore,
        test_helpers::FailingTodoStore,
        todo::{TEXT_REQUIRED, TodoPatch},
    };

    fn service() -> TodoService {
        TodoService::new(Arc::new(MemoryTodoStore::new()))
    }

    #[tokio::test]
    async fn blank_create_is_a_plain_bad_request() {
        let err = service().create("  ").await.expect_err("create should fail");

        match err {
            AppError::Validation { message, fields } => {
                assert_eq!(message, TEXT_REQUIRED);
                assert!(fields.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn blank_update_reports_the_text_field() {
        let service = service();
        let todo = service.create("Buy milk").await.unwrap();

        let patch = TodoPatch {
            text: Some(String::new()),
            completed: None,
        };
        let err = service.update(todo.id, patch).await.expect_err("update should fail");

        match err {
            AppError::Validation { fields, .. } => {
                assert_eq!(fields.get("text").map(String::as_str), Some(TEXT_REQUIRED));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_id_maps_to_not_found() {
        let err = service()
            .delete(Uuid::new_v4())
            .await
            .expect_err("delete should fail");

        assert!(matches!(err, AppError::NotFound(ref message) if message == TODO_NOT_FOUND));
    }

    #[tokio::test]
    async fn backend_failures_become_internal_errors() {
        let service = TodoService::new(Arc::new(FailingTodoStore));

        let err = service.list().await.expect_err("list should fail");

        match err {
            AppError::Internal { message, source } => {
                assert_eq!(message, "List todos failed");
                assert!(source.unwrap_or_default().contains("store unavailable"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
