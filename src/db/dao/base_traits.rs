use sea_orm::entity::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

/// Entities whose listings are ordered by creation time.
pub trait OrderedByCreation: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;
}

/// Active models keyed by a uuid and carrying `created_at`/`updated_at`.
pub trait StampedActiveModel {
    /// Fills in the id and both timestamps of a row about to be inserted.
    fn stamp_new(&mut self, id: Uuid, now: DateTimeWithTimeZone);

    fn touch(&mut self, now: DateTimeWithTimeZone);
}
