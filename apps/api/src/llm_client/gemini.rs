//! Gemini `generateContent` transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::schema::Schema;
use super::{Completion, CompletionRequest, CompletionTransport, LlmError};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all completion calls.
/// Hardcoded to keep extraction output stable across deployments.
pub const MODEL: &str = "gemini-2.5-flash";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Schema,
}

impl<'a> GenerateContentRequest<'a> {
    fn from_request(request: &'a CompletionRequest) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: &request.content,
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: &request.system_instruction,
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &request.response_schema,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
}

impl GenerateContentResponse {
    /// Joins the text parts of the first candidate. `None` when there is nothing to read.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.is_empty()).then_some(text)
    }

    fn into_completion(self) -> Completion {
        if let Some(reason) = self.prompt_feedback.as_ref().and_then(|f| f.block_reason.as_deref()) {
            warn!("Gemini blocked the prompt: {reason}");
        }
        if let Some(reason) = self
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
            .filter(|r| *r != "STOP")
        {
            warn!("Gemini finished with reason {reason}");
        }

        let (input_tokens, output_tokens) = self
            .usage_metadata
            .as_ref()
            .map(|u| (u.prompt_token_count, u.candidates_token_count))
            .unwrap_or_default();

        Completion {
            text: self.text(),
            input_tokens,
            output_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// Calls the Gemini REST API with structured JSON output enabled.
#[derive(Clone)]
pub struct GeminiTransport {
    client: Client,
}

impl GeminiTransport {
    pub fn new() -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(Duration::from_secs(120))
                .build()?,
        })
    }

    fn endpoint(&self) -> String {
        format!("{GEMINI_API_BASE}/{MODEL}:generateContent")
    }
}

#[async_trait]
impl CompletionTransport for GeminiTransport {
    async fn invoke(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<Completion, LlmError> {
        let body = GenerateContentRequest::from_request(request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned {}: {}", status, body);
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Decodes a 2xx body. An envelope that does not match is a malformed response,
/// not a transport failure.
fn parse_response(body: &str) -> Result<Completion, LlmError> {
    let response: GenerateContentResponse = serde_json::from_str(body)?;
    Ok(response.into_completion())
}
