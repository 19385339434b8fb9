use std::sync::Arc;

use crate::{config::AppConfig, store::TodoStore};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn TodoStore>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn TodoStore>) -> Arc<Self> {
        Arc::new(Self { config, store })
    }
}
