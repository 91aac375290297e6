use std::net::SocketAddr;

use axum::extract::{ConnectInfo, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::AppError;
use crate::generation::prompts::{newsletter_input, NEWSLETTER_PROMPT};
use crate::newsletter;
use crate::state::SharedState;

const EMPTY_NEWSLETTER: &str = "Unable to generate newsletter at this time.";

#[derive(Debug, Serialize)]
pub struct NewsletterResponse {
    pub newsletter: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportResponse {
    pub report: String,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
    pub active_projects: usize,
    pub update_count: usize,
}

async fn compose(state: &SharedState) -> newsletter::Report {
    let projects = state.store.list_projects().await;
    let updates = state.store.list_all_status_updates().await;
    newsletter::compose(&projects, &updates, Utc::now())
}

/// The composed report, without calling the text generator.
pub async fn report(State(state): State<SharedState>) -> Json<ReportResponse> {
    let report = compose(&state).await;
    Json(ReportResponse {
        report: report.to_string(),
        period_start: report.period_start,
        period_end: report.period_end,
        active_projects: report.active_projects,
        update_count: report.update_count,
    })
}

/// Compose the last month's report and have it written up as prose.
/// Unlike refinement there is no fallback: a generator failure fails the request.
pub async fn generate(
    State(state): State<SharedState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Json<NewsletterResponse>, AppError> {
    let generator = state
        .generator
        .clone()
        .ok_or_else(|| AppError::BadRequest("Gemini API key not configured".to_string()))?;

    state.newsletter_limiter.check(addr.ip()).map_err(|retry_after| {
        AppError::RateLimited(format!(
            "Too many newsletter requests. Retry in {retry_after} seconds."
        ))
    })?;

    let report = compose(&state).await;
    tracing::info!(
        active_projects = report.active_projects,
        update_count = report.update_count,
        "Generating newsletter"
    );

    let text = generator
        .generate(NEWSLETTER_PROMPT, &newsletter_input(&report.to_string()))
        .await
        .map_err(|source| AppError::Generation {
            message: "Failed to generate newsletter".to_string(),
            source,
        })?;

    let newsletter = if text.trim().is_empty() {
        EMPTY_NEWSLETTER.to_string()
    } else {
        text
    };

    Ok(Json(NewsletterResponse { newsletter }))
}
