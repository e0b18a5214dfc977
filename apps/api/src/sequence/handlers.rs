//! Axum route handlers for the Email Sequence API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::sequence::generator::{build_instruction, generate};
use crate::sequence::models::{EmailDraft, SequenceVariant};
use crate::sequence::settings::GenerationSettings;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateSequenceRequest {
    pub transcript: String,
    #[serde(default)]
    pub settings: GenerationSettings,
}

#[derive(Debug, Serialize)]
pub struct GenerateSequenceResponse {
    pub emails: Vec<EmailDraft>,
    pub variant: SequenceVariant,
    pub settings: GenerationSettings,
}

#[derive(Debug, Deserialize)]
pub struct InstructionPreviewRequest {
    #[serde(default)]
    pub settings: GenerationSettings,
}

#[derive(Debug, Serialize)]
pub struct InstructionPreviewResponse {
    pub instruction: String,
    pub variant: SequenceVariant,
}

/// POST /api/v1/email-sequence
///
/// Generates the six-touch-point follow-up sequence for a transcript.
pub async fn handle_generate_sequence(
    State(state): State<AppState>,
    payload: Result<Json<GenerateSequenceRequest>, JsonRejection>,
) -> Result<Json<GenerateSequenceResponse>, AppError> {
    let Json(request) = payload?;
    if request.transcript.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste a transcript first.".to_string(),
        ));
    }

    let sequence = generate(
        &request.transcript,
        &request.settings,
        state.sequence_variant,
        &state.llm,
    )
    .await?;

    Ok(Json(GenerateSequenceResponse {
        emails: sequence.emails,
        variant: state.sequence_variant,
        settings: request.settings,
    }))
}

/// POST /api/v1/email-sequence/instruction
///
/// Returns the system instruction the given settings would produce.
/// No LLM call; works without an API key.
pub async fn handle_preview_instruction(
    State(state): State<AppState>,
    payload: Result<Json<InstructionPreviewRequest>, JsonRejection>,
) -> Result<Json<InstructionPreviewResponse>, AppError> {
    let Json(request) = payload?;

    Ok(Json(InstructionPreviewResponse {
        instruction: build_instruction(&request.settings, state.sequence_variant),
        variant: state.sequence_variant,
    }))
}
