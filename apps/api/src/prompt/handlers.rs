//! Axum route handlers for the prompt-composition API.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::prompt::compose::build_six_system;
use crate::prompt::router::{route, Domain};
use crate::prompt::types::{Mood, ProfileHints, PromptOptions};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
    pub user_text: String,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub hints: ProfileHints,
    #[serde(flatten)]
    pub options: PromptOptions,
}

#[derive(Debug, Serialize)]
pub struct ComposeResponse {
    pub domain: Domain,
    pub system: String,
}

#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub user_text: String,
    #[serde(default)]
    pub hints: ProfileHints,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub domain: Domain,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/prompt/system
///
/// Composes the full system prompt for the given text, mood, hints, and plan
/// options, and reports which domain the router selected.
pub async fn handle_compose(
    Json(request): Json<ComposeRequest>,
) -> Result<Json<ComposeResponse>, AppError> {
    if request.user_text.trim().is_empty() {
        return Err(AppError::Validation("user_text cannot be empty".to_string()));
    }

    let domain = route(&request.user_text, &request.hints);
    let system = build_six_system(
        &request.user_text,
        request.mood,
        &request.hints,
        &request.options,
    );

    Ok(Json(ComposeResponse { domain, system }))
}

/// POST /api/v1/prompt/route
///
/// Routing preview: returns only the detected domain. Useful for the host UI
/// to badge a conversation before composing anything.
pub async fn handle_route(
    Json(request): Json<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    if request.user_text.trim().is_empty() {
        return Err(AppError::Validation("user_text cannot be empty".to_string()));
    }

    Ok(Json(RouteResponse {
        domain: route(&request.user_text, &request.hints),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::types::Plan;

    #[tokio::test]
    async fn test_compose_rejects_empty_text() {
        let request = ComposeRequest {
            user_text: "   ".to_string(),
            mood: Mood::Neutral,
            hints: ProfileHints::default(),
            options: PromptOptions::default(),
        };
        let result = handle_compose(Json(request)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_compose_returns_domain_and_nonempty_system() {
        let request = ComposeRequest {
            user_text: "how do stocks work".to_string(),
            mood: Mood::Neutral,
            hints: ProfileHints::default(),
            options: PromptOptions {
                plan: Plan::Pro,
                ..Default::default()
            },
        };
        let Json(response) = handle_compose(Json(request)).await.unwrap();
        assert_eq!(response.domain, Domain::Trading);
        assert!(!response.system.is_empty());
    }

    #[tokio::test]
    async fn test_route_preview_matches_composer_routing() {
        let request = RouteRequest {
            user_text: "best recipe for stew".to_string(),
            hints: ProfileHints::default(),
        };
        let Json(response) = handle_route(Json(request)).await.unwrap();
        assert_eq!(response.domain, Domain::Culinary);
    }

    #[test]
    fn test_compose_request_deserializes_with_flattened_options() {
        let request: ComposeRequest = serde_json::from_str(
            r#"{"user_text": "hi", "mood": "excited", "plan": "max", "display_name": "Ada"}"#,
        )
        .unwrap();
        assert_eq!(request.mood, Mood::Excited);
        assert_eq!(request.options.plan, Plan::Max);
        assert_eq!(request.options.display_name.as_deref(), Some("Ada"));
    }
}
