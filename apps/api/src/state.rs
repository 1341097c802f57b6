use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionProvider;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; each request owns everything else it touches.
#[derive(Clone)]
pub struct AppState {
    /// Scoring backend. `LlmClient` in production, a fake in tests.
    pub llm: Arc<dyn CompletionProvider>,
    pub config: Config,
}
