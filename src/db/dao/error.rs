use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DaoLayerError {
    #[error("database error: {0}")]
    Db(#[from] DbErr),
    #[error("{entity} not found (id={id})")]
    NotFound { entity: &'static str, id: Uuid },
}

impl DaoLayerError {
    pub(crate) fn missing<E>(id: Uuid) -> Self {
        Self::NotFound {
            entity: std::any::type_name::<E>(),
            id,
        }
    }
}

pub type DaoResult<T> = Result<T, DaoLayerError>;
