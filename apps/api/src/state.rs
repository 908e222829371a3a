use std::sync::Arc;

use crate::screening::skills::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Fixed skill vocabulary, built once at startup and shared read-only.
    pub vocabulary: Arc<SkillVocabulary>,
}
