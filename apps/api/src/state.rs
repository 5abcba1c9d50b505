use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;
use crate::resume_parser::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable handles; nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Text generator. Default: `LlmClient` against the configured chat-completions endpoint.
    pub llm: Arc<dyn TextGenerator>,
    /// Resume extractor. Default: `PdfResumeExtractor`.
    pub extractor: Arc<dyn ResumeExtractor>,
    pub config: Config,
}
