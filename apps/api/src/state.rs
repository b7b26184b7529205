use std::sync::Arc;

use crate::llm_client::Oracle;
use crate::sections::templates::SectionTemplates;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable text oracle. Production: GeminiClient. Tests: MockOracle.
    pub oracle: Arc<dyn Oracle>,
    /// Static section-to-attribute-template table, built once at startup.
    pub templates: Arc<SectionTemplates>,
}
