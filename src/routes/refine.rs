use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use super::json_body;
use crate::error::AppError;
use crate::generation::prompts::REFINE_PROMPT;
use crate::state::SharedState;

#[derive(Deserialize)]
pub struct RefineRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RefineResponse {
    pub refined: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RefineResponse {
    fn fallback(text: String, message: &str) -> Self {
        Self {
            refined: text,
            message: Some(message.to_string()),
        }
    }
}

/// Best-effort cleanup of user text. Generator problems never fail the
/// request: the original text comes back with an explanatory message.
pub async fn refine(
    State(state): State<SharedState>,
    payload: Result<Json<RefineRequest>, JsonRejection>,
) -> Result<Json<RefineResponse>, AppError> {
    let RefineRequest { text } = json_body(payload, "Text is required")?;
    if text.is_empty() {
        return Err(AppError::BadRequest("Text is required".to_string()));
    }

    let Some(generator) = state.generator.as_ref() else {
        return Ok(Json(RefineResponse::fallback(
            text,
            "Gemini API key not configured. Returning original text.",
        )));
    };

    match generator.generate(REFINE_PROMPT, &text).await {
        Ok(refined) if !refined.trim().is_empty() => Ok(Json(RefineResponse {
            refined,
            message: None,
        })),
        Ok(_) => {
            tracing::warn!("Refinement returned no text; returning original");
            Ok(Json(RefineResponse::fallback(
                text,
                "AI refinement returned no text. Returning original text.",
            )))
        }
        Err(e) => {
            tracing::warn!("Refinement failed, returning original text: {e}");
            Ok(Json(RefineResponse::fallback(
                text,
                "AI refinement failed. Returning original text.",
            )))
        }
    }
}
