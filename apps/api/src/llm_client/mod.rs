//! LLM Client: the single point of entry for all completion calls in Call Notes.
//!
//! ARCHITECTURAL RULE: No other module may talk to the completion service directly.
//! Extraction and sequence generation both go through `LlmClient`.
//!
//! The credential is injected at construction. When it is absent every call fails
//! with `LlmError::MissingApiKey` before the transport is touched.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

pub mod gemini;
pub mod prompts;
pub mod schema;

pub use gemini::{GeminiTransport, MODEL};
pub use schema::Schema;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Coarse classification of an `LlmError`, used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Transport,
    MalformedResponse,
}

impl LlmError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LlmError::MissingApiKey => ErrorKind::Configuration,
            LlmError::Http(_) | LlmError::Api { .. } => ErrorKind::Transport,
            LlmError::EmptyContent | LlmError::Parse(_) => ErrorKind::MalformedResponse,
        }
    }
}

/// One structured-output completion request.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Primary content, sent as the single user turn.
    pub content: String,
    pub system_instruction: String,
    pub response_schema: Schema,
}

/// The transport's answer: the response text, if any, plus token accounting.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    pub text: Option<String>,
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// The narrow seam around the remote completion service.
///
/// `GeminiTransport` is the production implementation; tests swap in a fake.
#[async_trait]
pub trait CompletionTransport: Send + Sync {
    async fn invoke(
        &self,
        api_key: &str,
        request: &CompletionRequest,
    ) -> Result<Completion, LlmError>;
}

/// The single LLM client shared by every handler.
#[derive(Clone)]
pub struct LlmClient {
    transport: Arc<dyn CompletionTransport>,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(transport: Arc<dyn CompletionTransport>, api_key: Option<String>) -> Self {
        Self {
            transport,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes one call to the completion service. No retries.
    pub async fn call(&self, request: &CompletionRequest) -> Result<Completion, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let completion = self.transport.invoke(api_key, request).await?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            completion.input_tokens, completion.output_tokens
        );

        Ok(completion)
    }

    /// Calls the service and deserializes the response text as JSON.
    /// An empty or whitespace-only body is `EmptyContent`, never a default value.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        request: &CompletionRequest,
    ) -> Result<T, LlmError> {
        let completion = self.call(request).await?;

        let text = completion
            .text
            .as_deref()
            .map(strip_json_fences)
            .filter(|t| !t.is_empty())
            .ok_or(LlmError::EmptyContent)?;

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}


#[cfg(test)]
mod tests {
    use super::testing::{configured_client, unconfigured_client, FakeReply, FakeTransport};
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            content: "hello".to_string(),
            system_instruction: "be brief".to_string(),
            response_schema: Schema::object().required_property("key", Schema::string("k")),
        }
    }

    #[derive(Debug, serde::Deserialize)]
    struct KeyOnly {
        key: String,
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_blank_api_key_counts_as_missing() {
        let transport = FakeTransport::replying("{}");
        let client = LlmClient::new(transport, Some("   ".to_string()));
        assert!(!client.is_configured());
    }

    #[tokio::test]
    async fn test_missing_api_key_never_reaches_transport() {
        let transport = FakeTransport::replying(r#"{"key": "value"}"#);
        let client = unconfigured_client(&transport);

        let err = client.call_json::<KeyOnly>(&request()).await.unwrap_err();

        assert!(matches!(err, LlmError::MissingApiKey));
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_call_json_parses_fenced_body() {
        let transport = FakeTransport::replying("```json\n{\"key\": \"value\"}\n```");
        let client = configured_client(&transport);

        let parsed: KeyOnly = client.call_json(&request()).await.unwrap();

        assert_eq!(parsed.key, "value");
        assert_eq!(transport.calls(), 1);
        assert_eq!(transport.last_request().unwrap().content, "hello");
    }

    #[tokio::test]
    async fn test_missing_text_is_empty_content() {
        let transport = FakeTransport::new(FakeReply::Empty);
        let client = configured_client(&transport);

        let err = client.call_json::<KeyOnly>(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_whitespace_text_is_empty_content() {
        let transport = FakeTransport::replying("  \n ");
        let client = configured_client(&transport);

        let err = client.call_json::<KeyOnly>(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_non_json_text_is_parse_error() {
        let transport = FakeTransport::replying("Sure! Here are your notes.");
        let client = configured_client(&transport);

        let err = client.call_json::<KeyOnly>(&request()).await.unwrap_err();
        assert!(matches!(err, LlmError::Parse(_)));
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }

    #[tokio::test]
    async fn test_api_error_is_transport_kind() {
        let transport = FakeTransport::new(FakeReply::Status(429, "quota exceeded".to_string()));
        let client = configured_client(&transport);

        let err = client.call(&request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(transport.calls(), 1, "no retries");
    }
}
