use sea_orm::{ActiveValue::Set, entity::prelude::*};

use crate::db::dao::{OrderedByCreation, StampedActiveModel};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todos")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub text: String,
    #[sea_orm(default_value = false)]
    pub completed: bool,
    #[sea_orm(indexed, default_expr = "Expr::current_timestamp()")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(default_expr = "Expr::current_timestamp()")]
    pub updated_at: DateTimeWithTimeZone,
}

impl ActiveModelBehavior for ActiveModel {}

impl StampedActiveModel for ActiveModel {
    fn stamp_new(&mut self, id: Uuid, now: DateTimeWithTimeZone) {
        self.id = Set(id);
        self.created_at = Set(now);
        self.updated_at = Set(now);
    }

    fn touch(&mut self, now: DateTimeWithTimeZone) {
        self.updated_at = Set(now);
    }
}

impl OrderedByCreation for Entity {
    fn created_at_column() -> Column {
        Column::CreatedAt
    }
}

impl From<Model> for crate::todo::Todo {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            completed: model.completed,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}
