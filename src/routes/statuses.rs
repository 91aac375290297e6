use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;

use super::{json_body, parse_id};
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::{StatusUpdate, StatusUpdateFields};
use crate::state::SharedState;

const NOT_FOUND: &str = "Project not found";

pub async fn list_all(State(state): State<SharedState>) -> Json<Vec<StatusUpdate>> {
    Json(state.store.list_all_status_updates().await)
}

pub async fn list_by_project(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<StatusUpdate>>, AppError> {
    let id = parse_id(&id, NOT_FOUND)?;
    state
        .store
        .get_project(id)
        .await
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(state.store.list_status_updates_for_project(id).await))
}

pub async fn create(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusUpdateFields>, JsonRejection>,
) -> Result<(StatusCode, Json<StatusUpdate>), AppError> {
    let project_id = parse_id(&id, NOT_FOUND)?;
    let fields = json_body(payload, "Invalid status update data")?;
    fields.validate().map_err(AppError::BadRequest)?;

    // Updates may only reference existing projects.
    state
        .store
        .get_project(project_id)
        .await
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    let update = state
        .store
        .create_status_update(fields.for_project(project_id))
        .await;

    audit::log_event(
        "status_update.created",
        "status_update",
        update.id,
        Some(json!({ "project_id": project_id, "commenter": &update.commenter })),
    );

    Ok((StatusCode::CREATED, Json(update)))
}
