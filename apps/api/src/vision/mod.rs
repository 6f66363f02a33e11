//! Vision description route — the one exception-prone path in the service.
//! Composition is pure; only the outbound LLM call can fail, and that failure
//! maps to HTTP 500 via `AppError::Llm`.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::prompt::compose::build_six_system;
use crate::prompt::types::{Mood, ProfileHints, PromptOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DescribeRequest {
    /// Base64-encoded image payload.
    pub image_base64: String,
    /// e.g. "image/jpeg", "image/png"
    pub media_type: String,
    /// What the user asked about the image. Defaults to a plain description.
    #[serde(default)]
    pub user_text: Option<String>,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub hints: ProfileHints,
    #[serde(flatten)]
    pub options: PromptOptions,
}

#[derive(Debug, Serialize)]
pub struct DescribeResponse {
    pub request_id: Uuid,
    pub description: String,
}

/// POST /api/v1/vision/describe
///
/// Composes a system prompt for the user's plan and hints, then asks the LLM
/// to describe the attached image.
pub async fn handle_describe(
    State(state): State<AppState>,
    Json(request): Json<DescribeRequest>,
) -> Result<Json<DescribeResponse>, AppError> {
    if request.image_base64.trim().is_empty() {
        return Err(AppError::Validation(
            "image_base64 cannot be empty".to_string(),
        ));
    }

    let user_text = request
        .user_text
        .as_deref()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or("Describe this image for me.");

    let system = build_six_system(user_text, request.mood, &request.hints, &request.options);

    let response = state
        .llm
        .call_vision(&system, user_text, &request.image_base64, &request.media_type)
        .await
        .map_err(|e| AppError::Llm(format!("vision describe failed: {e}")))?;

    let description = response
        .text()
        .ok_or_else(|| AppError::Llm("vision describe returned no text".to_string()))?
        .to_string();

    Ok(Json(DescribeResponse {
        request_id: Uuid::new_v4(),
        description,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_request_defaults_optional_fields() {
        let request: DescribeRequest = serde_json::from_str(
            r#"{"image_base64": "aGVsbG8=", "media_type": "image/png"}"#,
        )
        .unwrap();
        assert!(request.user_text.is_none());
        assert_eq!(request.mood, Mood::Neutral);
        assert!(!request.hints.is_kid());
    }
}
