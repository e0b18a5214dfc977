//! Axum route handlers for the Analysis API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::analysis::extractor::extract;
use crate::analysis::models::{AnalysisRecord, TableRow};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub transcript: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: AnalysisRecord,
    pub rows: Vec<TableRow>,
}

/// POST /api/v1/analysis
///
/// Extracts the note record from a pasted transcript.
/// `rows` carries the same values with display labels for table rendering.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let Json(request) = payload?;
    if request.transcript.trim().is_empty() {
        return Err(AppError::Validation(
            "Please paste a transcript first.".to_string(),
        ));
    }

    let analysis = extract(&request.transcript, &state.llm).await?;
    let rows = analysis.rows();

    Ok(Json(AnalyzeResponse { analysis, rows }))
}
