use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, FromQueryResult, IntoActiveModel,
    PrimaryKeyTrait, QueryOrder, entity::prelude::DateTimeWithTimeZone,
};
use uuid::Uuid;

use super::base_traits::{OrderedByCreation, StampedActiveModel};
use super::error::{DaoLayerError, DaoResult};

type ModelOf<D> = <<D as DaoBase>::Entity as EntityTrait>::Model;
type ActiveOf<D> = <<D as DaoBase>::Entity as EntityTrait>::ActiveModel;

fn now() -> DateTimeWithTimeZone {
    Utc::now().fixed_offset()
}

/// Row access shared by every uuid-keyed, timestamped table.
#[async_trait::async_trait]
pub trait DaoBase: Clone + Send + Sync + Sized
where
    ModelOf<Self>: FromQueryResult + IntoActiveModel<ActiveOf<Self>> + Send + Sync,
    ActiveOf<Self>: ActiveModelTrait<Entity = Self::Entity> + StampedActiveModel + Send,
    <<Self::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType:
        From<Uuid> + Send + Sync,
    Self::Entity: OrderedByCreation,
{
    type Entity: EntityTrait + Send + Sync;

    fn from_db(db: DatabaseConnection) -> Self;

    fn new(db: &DatabaseConnection) -> Self {
        Self::from_db(db.clone())
    }

    fn db(&self) -> &DatabaseConnection;

    async fn insert_new(
        &self,
        data: impl IntoActiveModel<ActiveOf<Self>> + Send,
    ) -> DaoResult<ModelOf<Self>> {
        let mut active = data.into_active_model();
        active.stamp_new(Uuid::new_v4(), now());
        Ok(active.insert(self.db()).await?)
    }

    async fn get(&self, id: Uuid) -> DaoResult<ModelOf<Self>> {
        Self::Entity::find_by_id(id)
            .one(self.db())
            .await?
            .ok_or_else(|| DaoLayerError::missing::<Self::Entity>(id))
    }

    async fn list_newest_first(&self) -> DaoResult<Vec<ModelOf<Self>>> {
        let rows = Self::Entity::find()
            .order_by_desc(Self::Entity::created_at_column())
            .all(self.db())
            .await?;
        Ok(rows)
    }

    /// Loads the row, lets `edit` change it, and saves it with a fresh
    /// `updated_at` even when `edit` touched nothing else.
    async fn modify<F>(&self, id: Uuid, edit: F) -> DaoResult<ModelOf<Self>>
    where
        F: for<'a> FnOnce(&'a mut ActiveOf<Self>) + Send,
    {
        let mut active = self.get(id).await?.into_active_model();
        edit(&mut active);
        active.touch(now());
        Ok(active.update(self.db()).await?)
    }

    async fn remove(&self, id: Uuid) -> DaoResult<()> {
        let result = Self::Entity::delete_by_id(id).exec(self.db()).await?;
        match result.rows_affected {
            0 => Err(DaoLayerError::missing::<Self::Entity>(id)),
            _ => Ok(()),
        }
    }
}
