use crate::llm_client::LlmClient;

/// Shared application state injected into route handlers via Axum extractors.
/// Prompt composition is pure, so the only shared resource is the LLM client
/// used by the vision route.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
}
