use std::sync::Arc;

use crate::{services::todo_service::TodoService, state::AppState, store::TodoStore};

#[derive(Clone)]
pub struct ServiceContext {
    store: Arc<dyn TodoStore>,
}

impl ServiceContext {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub fn from_state(state: &AppState) -> Self {
        Self::new(Arc::clone(&state.store))
    }

    pub fn todo(&self) -> TodoService {
        TodoService::new(Arc::clone(&self.store))
    }
}
