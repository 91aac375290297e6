use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use super::{json_body, parse_id};
use crate::error::AppError;
use crate::middleware::audit;
use crate::models::{Project, ProjectFields, ProjectStatus};
use crate::state::SharedState;

const NOT_FOUND: &str = "Project not found";

#[derive(Deserialize)]
pub struct SetStatus {
    pub status: ProjectStatus,
}

pub async fn list(State(state): State<SharedState>) -> Json<Vec<Project>> {
    Json(state.store.list_projects().await)
}

pub async fn get(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<Project>, AppError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let project = state
        .store
        .get_project(id)
        .await
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;
    Ok(Json(project))
}

pub async fn create(
    State(state): State<SharedState>,
    payload: Result<Json<ProjectFields>, JsonRejection>,
) -> Result<(StatusCode, Json<Project>), AppError> {
    let fields = json_body(payload, "Invalid project data")?;
    fields.validate().map_err(AppError::BadRequest)?;

    let project = state.store.create_project(fields).await;

    audit::log_event(
        "project.created",
        "project",
        project.id,
        Some(json!({ "title": &project.title })),
    );

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<ProjectFields>, JsonRejection>,
) -> Result<Json<Project>, AppError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let fields = json_body(payload, "Invalid project data")?;
    fields.validate().map_err(AppError::BadRequest)?;

    let project = state
        .store
        .update_project(id, fields)
        .await
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    audit::log_event("project.updated", "project", project.id, None);

    Ok(Json(project))
}

pub async fn set_status(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<SetStatus>, JsonRejection>,
) -> Result<Json<Project>, AppError> {
    let id = parse_id(&id, NOT_FOUND)?;
    let SetStatus { status } = json_body(payload, "Invalid status value")?;

    let project = state
        .store
        .set_project_status(id, status)
        .await
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.to_string()))?;

    audit::log_event(
        "project.status_changed",
        "project",
        project.id,
        Some(json!({ "status": status.as_str() })),
    );

    Ok(Json(project))
}
