use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult, TodoStore};
use crate::todo::{Todo, TodoPatch, normalize_text};

/// Process-local store. Records live in insertion order; nothing survives a
/// restart.
#[derive(Default)]
pub struct MemoryTodoStore {
    todos: RwLock<Vec<Todo>>,
}

impl MemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self) -> StoreResult<Vec<Todo>> {
        let todos = self.todos.read().await;
        // reversed first so that equal timestamps keep the later insert on top
        let mut listed: Vec<Todo> = todos.iter().rev().cloned().collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn create(&self, text: &str) -> StoreResult<Todo> {
        let text = normalize_text(text)?;
        let now = Utc::now();
        let todo = Todo {
            id: Uuid::new_v4(),
            text,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        self.todos.write().await.push(todo.clone());
        Ok(todo)
    }

    async fn update(&self, id: Uuid, patch: TodoPatch) -> StoreResult<Todo> {
        let TodoPatch { text, completed } = patch.normalized()?;
        let mut todos = self.todos.write().await;
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;

        if let Some(text) = text {
            todo.text = text;
        }
        if let Some(completed) = completed {
            todo.completed = completed;
        }
        todo.updated_at = Utc::now();
        Ok(todo.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let mut todos = self.todos.write().await;
        let index = todos
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))?;
        todos.remove(index);
        Ok(())
    }
}
