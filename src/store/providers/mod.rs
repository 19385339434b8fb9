mod memory;
mod postgres;
mod registry;
mod sqlite;

use std::sync::Arc;

pub use registry::{StoreProvider, StoreProviderId, StoreProviders};

use self::{memory::MemoryStoreProvider, postgres::PostgresStoreProvider, sqlite::SqliteStoreProvider};

pub fn default_registry() -> anyhow::Result<StoreProviders> {
    StoreProviders::new()
        .with_provider(Arc::new(PostgresStoreProvider))?
        .with_provider(Arc::new(SqliteStoreProvider))?
        .with_provider(Arc::new(MemoryStoreProvider))
}
