//! Extraction Client: turns one transcript into an `AnalysisRecord`.
//!
//! One request, one response: transcript as content, fixed note-taker instruction,
//! fifteen-property object schema. Any failure is terminal for the call.

use thiserror::Error;
use tracing::info;

use crate::analysis::models::{AnalysisRecord, ANALYSIS_FIELDS};
use crate::analysis::prompts::EXTRACTION_SYSTEM_TEMPLATE;
use crate::llm_client::prompts::{NO_INVENTION_INSTRUCTION, TRANSCRIPT_VOICE_INSTRUCTION};
use crate::llm_client::{CompletionRequest, LlmClient, LlmError, Schema};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("transcript cannot be empty")]
    EmptyTranscript,

    #[error("transcript analysis failed: {0}")]
    Llm(#[from] LlmError),
}

/// The system instruction sent with every extraction request.
pub fn extraction_instruction() -> String {
    EXTRACTION_SYSTEM_TEMPLATE
        .replace("{voice_instruction}", TRANSCRIPT_VOICE_INSTRUCTION)
        .replace("{no_invention_instruction}", NO_INVENTION_INSTRUCTION)
}

/// Object schema with one required string property per record field.
pub fn extraction_schema() -> Schema {
    ANALYSIS_FIELDS
        .iter()
        .fold(Schema::object(), |schema, field| {
            schema.required_property(field.key, Schema::string(field.description))
        })
}

pub fn build_request(transcript: &str) -> CompletionRequest {
    CompletionRequest {
        content: transcript.to_string(),
        system_instruction: extraction_instruction(),
        response_schema: extraction_schema(),
    }
}

/// Extracts the note record from a transcript.
pub async fn extract(transcript: &str, llm: &LlmClient) -> Result<AnalysisRecord, ExtractionError> {
    if transcript.trim().is_empty() {
        return Err(ExtractionError::EmptyTranscript);
    }

    info!("Analyzing transcript ({} chars)", transcript.chars().count());
    let record = llm
        .call_json::<AnalysisRecord>(&build_request(transcript))
        .await?;
    info!("Transcript analyzed: likelihood_to_close={}", record.likelihood_to_close);

    Ok(record)
}
