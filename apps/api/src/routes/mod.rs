pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::sequence::handlers as sequence;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(analysis::handle_analyze))
        // Email Sequence API
        .route(
            "/api/v1/email-sequence",
            post(sequence::handle_generate_sequence),
        )
        .route(
            "/api/v1/email-sequence/instruction",
            post(sequence::handle_preview_instruction),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::analysis::models::sample_json;
    use crate::llm_client::testing::{configured_client, unconfigured_client, FakeTransport};
    use crate::llm_client::LlmClient;
    use crate::sequence::models::SequenceVariant;

    fn app(llm: LlmClient) -> Router {
        build_router(AppState {
            llm,
            sequence_variant: SequenceVariant::Compact,
        })
    }

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
        post_raw(app, uri, body.to_string()).await
    }

    async fn post_raw(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn sequence_body() -> String {
        let emails: Vec<_> = (1..=6)
            .map(|i| json!({ "subject": format!("S{i}"), "body": format!("B{i}?"), "recommendedDate": format!("Day {i}") }))
            .collect();
        json!({ "emails": emails }).to_string()
    }

    #[tokio::test]
    async fn test_health_reports_missing_key() {
        let transport = FakeTransport::replying("{}");
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

        let response = app(unconfigured_client(&transport)).oneshot(request).await.unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], "ok");
        assert_eq!(body["llm_configured"], false);
    }

    #[tokio::test]
    async fn test_analyze_returns_record_and_rows() {
        let transport = FakeTransport::replying(&sample_json().to_string());
        let (status, body) = post_json(
            app(configured_client(&transport)),
            "/api/v1/analysis",
            json!({ "transcript": "Maria: we are four people." }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["likelihoodToClose"], "7/10");
        assert_eq!(body["rows"].as_array().unwrap().len(), 15);
        assert_eq!(body["rows"][0]["label"], "Number of year-round employees");
    }

    #[tokio::test]
    async fn test_analyze_blank_transcript_is_bad_request() {
        let transport = FakeTransport::replying(&sample_json().to_string());
        let (status, body) = post_json(
            app(configured_client(&transport)),
            "/api/v1/analysis",
            json!({ "transcript": "   " }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_without_key_is_configuration_error() {
        let transport = FakeTransport::replying(&sample_json().to_string());
        let (status, body) = post_json(
            app(unconfigured_client(&transport)),
            "/api/v1/analysis",
            json!({ "transcript": "Maria: we are four people." }),
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["error"]["code"], "CONFIGURATION_ERROR");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_generate_sequence_with_partial_settings() {
        let transport = FakeTransport::replying(&sequence_body());
        let (status, body) = post_json(
            app(configured_client(&transport)),
            "/api/v1/email-sequence",
            json!({ "transcript": "Maria: April is chaos.", "settings": { "brevity": "standard" } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["emails"].as_array().unwrap().len(), 6);
        assert_eq!(body["emails"][5]["subject"], "S6");
        assert_eq!(body["variant"], "compact");
        assert_eq!(body["settings"]["brevity"], "standard");
        assert_eq!(body["settings"]["tone"], "casual");

        let sent = transport.last_request().unwrap();
        assert!(sent.system_instruction.contains("3-4 sentences max"));
    }

    #[tokio::test]
    async fn test_generate_sequence_malformed_response_is_bad_gateway() {
        let transport = FakeTransport::replying("not json at all");
        let (status, body) = post_json(
            app(configured_client(&transport)),
            "/api/v1/email-sequence",
            json!({ "transcript": "Maria: April is chaos." }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "MALFORMED_RESPONSE");
    }

    #[tokio::test]
    async fn test_instruction_preview_needs_no_key() {
        let transport = FakeTransport::replying("{}");
        let (status, body) = post_json(
            app(unconfigured_client(&transport)),
            "/api/v1/email-sequence/instruction",
            json!({ "settings": { "tone": "formal" } }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body["instruction"].as_str().unwrap().contains("Formal and professional"));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_missing_transcript_field_is_validation_error() {
        let transport = FakeTransport::replying(&sample_json().to_string());
        let (status, body) = post_json(
            app(configured_client(&transport)),
            "/api/v1/analysis",
            json!({}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("transcript"));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_analyze_non_json_body_is_validation_error() {
        let transport = FakeTransport::replying(&sample_json().to_string());
        let (status, body) = post_raw(
            app(configured_client(&transport)),
            "/api/v1/analysis",
            "transcript=hello".to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_unknown_setting_value_is_validation_error() {
        let transport = FakeTransport::replying(&sequence_body());
        let (status, body) = post_json(
            app(configured_client(&transport)),
            "/api/v1/email-sequence",
            json!({ "transcript": "Maria: April is chaos.", "settings": { "tone": "sarcastic" } }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn test_instruction_preview_rejects_bad_body() {
        let transport = FakeTransport::replying("{}");
        let (status, body) = post_raw(
            app(unconfigured_client(&transport)),
            "/api/v1/email-sequence/instruction",
            "{not json".to_string(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
