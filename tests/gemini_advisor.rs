//! Gemini adapter against a mock HTTP server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use freight_quote::application::ApplicationError;
use freight_quote::application::services::{NO_ANALYSIS, QuoteAnalysisService};
use freight_quote::config::AdvisorConfig;
use freight_quote::domain::entities::ShipmentRequest;
use freight_quote::domain::value_objects::CargoType;
use freight_quote::evaluate;
use freight_quote::infrastructure::advisor::{AdvisorError, GeminiAdvisor, QuoteAdvisor};
use freight_quote::infrastructure::registry::CarrierRegistry;
use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

fn advisor(server: &MockServer, api_key: Option<&str>) -> GeminiAdvisor {
    let config = AdvisorConfig {
        api_key: api_key.map(str::to_string),
        base_url: server.uri(),
        timeout_ms: 2_000,
        ..AdvisorConfig::default()
    };
    GeminiAdvisor::from_config(&config).unwrap()
}

fn reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn sends_prompt_with_key_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "compare these"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("Pick Rongyun.")))
        .expect(1)
        .mount(&server)
        .await;

    let text = advisor(&server, Some("test-key"))
        .analyze("compare these")
        .await
        .unwrap();
    assert_eq!(text, "Pick Rongyun.");
}

#[tokio::test]
async fn missing_key_makes_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(reply("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let err = advisor(&server, None).analyze("prompt").await.unwrap_err();
    assert!(matches!(err, AdvisorError::MissingCredential { .. }));
}

#[tokio::test]
async fn status_codes_map_to_errors() {
    let cases = [
        (400, "InvalidRequest"),
        (403, "Authentication"),
        (429, "RateLimited"),
        (503, "Connection"),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
            .mount(&server)
            .await;

        let err = advisor(&server, Some("k")).analyze("prompt").await.unwrap_err();
        let matched = match &err {
            AdvisorError::InvalidRequest { .. } => "InvalidRequest",
            AdvisorError::Authentication { .. } => "Authentication",
            AdvisorError::RateLimited { .. } => "RateLimited",
            AdvisorError::Connection { .. } => "Connection",
            _ => "other",
        };
        assert_eq!(matched, expected, "status {status} gave {err}");
    }
}

#[tokio::test]
async fn malformed_body_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = advisor(&server, Some("k")).analyze("prompt").await.unwrap_err();
    assert!(matches!(err, AdvisorError::ProtocolError { .. }));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(reply("late"))
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = AdvisorConfig {
        api_key: Some("k".to_string()),
        base_url: server.uri(),
        timeout_ms: 50,
        ..AdvisorConfig::default()
    };
    let err = GeminiAdvisor::from_config(&config)
        .unwrap()
        .analyze("prompt")
        .await
        .unwrap_err();
    assert!(err.is_retryable());
}

#[tokio::test]
async fn service_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"candidates": []})))
        .mount(&server)
        .await;

    let service = QuoteAnalysisService::with_defaults(Arc::new(advisor(&server, Some("k"))));
    let request = ShipmentRequest::builder("Shanghai", "Beijing")
        .cargo_type(CargoType::Ndg)
        .weight_kg(Decimal::from(600))
        .build()
        .unwrap();
    let outcomes = evaluate(&request, CarrierRegistry::builtin().as_slice());

    let analysis = service.analyze(&request, &outcomes).await.unwrap();
    assert_eq!(analysis, NO_ANALYSIS);

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("- Origin: Shanghai"));
    assert!(prompt.contains("rongyun"));
}

#[tokio::test]
async fn service_reports_user_message_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let service = QuoteAnalysisService::with_defaults(Arc::new(advisor(&server, Some("k"))));
    let request = ShipmentRequest::builder("Shanghai", "Beijing")
        .cargo_type(CargoType::Ndg)
        .weight_kg(Decimal::from(600))
        .build()
        .unwrap();
    let outcomes = evaluate(&request, CarrierRegistry::builtin().as_slice());

    let err = service.analyze(&request, &outcomes).await.unwrap_err();
    assert!(matches!(err, ApplicationError::Advisor(_)));
    assert_eq!(
        err.user_message(),
        "Failed to generate analysis. Please try again."
    );
}
