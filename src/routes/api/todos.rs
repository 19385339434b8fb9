use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, put},
};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::{AppError, FieldErrors},
    response::{ApiResponse, ApiResult, MessageBody},
    services::{
        ServiceContext,
        todo_service::{TODO_NOT_FOUND, TodoService},
    },
    state::AppState,
    todo::{TEXT_REQUIRED, Todo, TodoPatch, normalize_text},
};

const BASE_PATH: &str = "/todos";
const ITEM_PATH: &str = "/todos/{id}";

const INVALID_BODY_MESSAGE: &str = "Invalid JSON body";
const TEXT_NOT_STRING: &str = "Text must be a string";
const COMPLETED_NOT_BOOL: &str = "Completed must be a boolean";
const DELETED_MESSAGE: &str = "Todo deleted successfully";

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(BASE_PATH, get(list_todos).post(create_todo))
        .route(ITEM_PATH, put(update_todo).delete(delete_todo))
        .with_state(state)
}

async fn list_todos(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Todo>> {
    let todos = todo_service_from_state(state.as_ref()).list().await?;
    ApiResponse::ok(todos)
}

async fn create_todo(
    State(state): State<Arc<AppState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Todo> {
    let Json(body) = body.map_err(invalid_body)?;
    let text = body
        .get("text")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::bad_request(TEXT_REQUIRED))?;

    let todo = todo_service_from_state(state.as_ref()).create(text).await?;
    ApiResponse::created(todo)
}

async fn update_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Todo> {
    let Json(body) = body.map_err(invalid_body)?;
    let patch = parse_patch(&body)?;
    let id = parse_id(&id)?;

    let todo = todo_service_from_state(state.as_ref())
        .update(id, patch)
        .await?;
    ApiResponse::ok(todo)
}

async fn delete_todo(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<MessageBody> {
    let id = parse_id(&id)?;
    todo_service_from_state(state.as_ref()).delete(id).await?;
    ApiResponse::ok(MessageBody::new(DELETED_MESSAGE))
}

fn invalid_body(rejection: JsonRejection) -> AppError {
    AppError::bad_request(format!("{INVALID_BODY_MESSAGE}: {}", rejection.body_text()))
}

/// An id that could never have been issued is reported like any other
/// unknown id.
fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(TODO_NOT_FOUND))
}

/// Reads `text` and `completed` out of an update body, collecting one message
/// per bad field. Other keys are ignored.
fn parse_patch(body: &Value) -> Result<TodoPatch, AppError> {
    let Some(object) = body.as_object() else {
        return Err(AppError::bad_request(format!(
            "{INVALID_BODY_MESSAGE}: expected an object"
        )));
    };

    let mut errors = FieldErrors::new();
    let mut patch = TodoPatch::default();

    match object.get("text") {
        None => {}
        Some(Value::String(text)) => match normalize_text(text) {
            Ok(text) => patch.text = Some(text),
            Err(err) => {
                errors.insert(err.field.to_string(), err.reason.to_string());
            }
        },
        Some(_) => {
            errors.insert("text".to_string(), TEXT_NOT_STRING.to_string());
        }
    }

    match object.get("completed") {
        None => {}
        Some(Value::Bool(completed)) => patch.completed = Some(*completed),
        Some(_) => {
            errors.insert("completed".to_string(), COMPLETED_NOT_BOOL.to_string());
        }
    }

    if !errors.is_empty() {
        return Err(AppError::validation(errors));
    }
    Ok(patch)
}

fn todo_service_from_state(state: &AppState) -> TodoService {
    ServiceContext::from_state(state).todo()
}
