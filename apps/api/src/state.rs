use crate::llm_client::LlmClient;
use crate::sequence::models::SequenceVariant;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Email schema/instruction version, fixed for the lifetime of the process.
    pub sequence_variant: SequenceVariant,
}
