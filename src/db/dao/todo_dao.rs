use sea_orm::{DatabaseConnection, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::{prelude::Todo, todo};

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoDao {
    type Entity = Todo;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoDao {
    pub async fn create_todo(&self, text: String) -> DaoResult<todo::Model> {
        let model = todo::ActiveModel {
            text: Set(text),
            completed: Set(false),
            ..Default::default()
        };
        self.insert_new(model).await
    }

    pub async fn list_todos(&self) -> DaoResult<Vec<todo::Model>> {
        self.list_newest_first().await
    }

    pub async fn update_todo(
        &self,
        id: &Uuid,
        text: Option<String>,
        completed: Option<bool>,
    ) -> DaoResult<todo::Model> {
        self.modify(*id, move |active| {
            if let Some(text) = text {
                active.text = Set(text);
            }
            if let Some(completed) = completed {
                active.completed = Set(completed);
            }
        })
        .await
    }

    pub async fn delete_todo(&self, id: &Uuid) -> DaoResult<()> {
        self.remove(*id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, TimeZone};
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
    use uuid::Uuid;

    use super::TodoDao;
    use crate::db::dao::{DaoBase, DaoLayerError};
    use crate::db::entities::todo;

    fn ts() -> chrono::DateTime<chrono::FixedOffset> {
        FixedOffset::east_opt(0)
            .expect("offset should be valid")
            .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
            .single()
            .expect("timestamp should be valid")
    }

    fn todo_model(id: Uuid, text: &str, completed: bool) -> todo::Model {
        let now = ts();
        todo::Model {
            id,
            text: text.to_string(),
            completed,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_todo_returns_inserted_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[todo_model(id, "Buy milk", false)]])
            .into_connection();
        let dao = TodoDao::new(&db);

        let created = dao
            .create_todo("Buy milk".to_string())
            .await
            .expect("insert should succeed");

        assert_eq!(created.text, "Buy milk");
        assert!(!created.completed);
    }

    #[tokio::test]
    async fn list_todos_orders_by_created_at_descending() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo::Model>::new()])
            .into_connection();
        let dao = TodoDao::new(&db);

        dao.list_todos().await.expect("query should succeed");

        let log = db.into_transaction_log();
        let sql = format!("{:?}", log[0]);
        assert!(sql.contains("ORDER BY"), "{sql}");
        assert!(sql.contains("created_at"), "{sql}");
        assert!(sql.contains("DESC"), "{sql}");
    }

    #[tokio::test]
    async fn update_todo_fails_when_row_is_missing() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo::Model>::new()])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao
            .update_todo(&id, None, Some(true))
            .await
            .expect_err("missing row should fail");

        assert!(matches!(err, DaoLayerError::NotFound { id: missing, .. } if missing == id));
    }

    #[tokio::test]
    async fn update_todo_applies_only_supplied_fields() {
        let id = Uuid::new_v4();
        let existing = todo_model(id, "Buy milk", false);
        let updated = todo::Model {
            completed: true,
            ..existing.clone()
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[existing]])
            .append_query_results([[updated]])
            .into_connection();
        let dao = TodoDao::new(&db);

        let model = dao
            .update_todo(&id, None, Some(true))
            .await
            .expect("update should succeed");
        assert!(model.completed);
        assert_eq!(model.text, "Buy milk");

        let log = db.into_transaction_log();
        let update_sql = format!("{:?}", log[1]);
        assert!(update_sql.contains("UPDATE"), "{update_sql}");
        assert!(update_sql.contains("updated_at"), "{update_sql}");
    }

    #[tokio::test]
    async fn delete_todo_reports_missing_row() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao.delete_todo(&id).await.expect_err("delete should fail");
        assert!(matches!(err, DaoLayerError::NotFound { .. }));
    }

    #[tokio::test]
    async fn list_todos_maps_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let dao = TodoDao::new(&db);

        let err = dao.list_todos().await.expect_err("query should fail");
        assert!(matches!(err, DaoLayerError::Db(_)));
    }
}
