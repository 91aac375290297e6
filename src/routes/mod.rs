pub mod projects;
pub mod statuses;
pub mod refine;
pub mod newsletter;

use axum::extract::rejection::JsonRejection;
use axum::routing::{get, patch, post};
use axum::Json;
use axum::Router;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Projects
        .route("/api/projects", get(projects::list).post(projects::create))
        .route(
            "/api/projects/{id}",
            get(projects::get).patch(projects::update),
        )
        .route("/api/projects/{id}/status", patch(projects::set_status))
        // Status updates
        .route("/api/all-statuses", get(statuses::list_all))
        .route(
            "/api/projects/{id}/statuses",
            get(statuses::list_by_project).post(statuses::create),
        )
        // Text generation
        .route("/api/refine-text", post(refine::refine))
        .route("/api/newsletter", get(newsletter::generate))
        .route("/api/newsletter/report", get(newsletter::report))
}

/// Unwrap a JSON body, replacing any deserialization failure with a generic
/// client-facing message.
pub(crate) fn json_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    message: &str,
) -> Result<T, AppError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("Rejected request body: {rejection}");
            Err(AppError::BadRequest(message.to_string()))
        }
    }
}

/// Ids are opaque to clients; anything that is not one of ours is simply absent.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound(not_found.to_string()))
}
