//! HTTP tests for the chat, health and page endpoints.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::TestHarness;
use responder_core::kernel::{MockGenerator, TestDependencies};
use serde_json::json;

#[tokio::test]
async fn fire_emergency_returns_fire_number() {
    let harness = TestHarness::new();

    let (status, body) = harness.chat("There is a fire in my building").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"response": "Fire: 101"}));
    assert!(!harness.generator.was_called());
}

#[tokio::test]
async fn directory_service_matches_before_fixed_numbers() {
    let harness = TestHarness::new();

    let (status, body) = harness.chat("need the women helpline").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Women Helpline: 1091");
}

#[tokio::test]
async fn empty_message_asks_for_valid_query() {
    let harness = TestHarness::new();

    let (status, body) = harness.chat("   ").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Please enter a valid query");
    assert!(!harness.generator.was_called());
}

#[tokio::test]
async fn missing_message_field_is_treated_as_empty() {
    let harness = TestHarness::new();

    let (status, body) = harness.post_chat_raw("{}").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Please enter a valid query");

    let (status, body) = harness.post_chat_raw(r#"{"message": null}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Please enter a valid query");
}

#[tokio::test]
async fn malformed_body_is_rejected() {
    let harness = TestHarness::new();

    let (status, _) = harness.post_chat_raw("not json").await;

    assert!(status.is_client_error());
    assert!(!harness.generator.was_called());
}

#[tokio::test]
async fn hospitals_listed_for_location() {
    let harness = TestHarness::new();

    let (status, body) = harness.chat("Hospitals in Pune").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "Sassoon General Hospital (Pune) - 02026128000\nRuby Hall Clinic (Pune) - 02066455100"
    );
}

#[tokio::test]
async fn hospitals_unknown_location_reports_none() {
    let harness = TestHarness::new();

    let (_, body) = harness.chat("is there a hospital in atlantis").await;

    assert_eq!(body["response"], "No hospitals found");
    assert!(!harness.generator.was_called());
}

#[tokio::test]
async fn repeated_separator_keeps_text_after_last_split() {
    let harness = TestHarness::new();

    let (_, body) = harness.chat("hospital in in pune").await;

    assert_eq!(body["response"], "No hospitals found");
}

#[tokio::test]
async fn intent_reply_for_first_aid_question() {
    let harness = TestHarness::new();

    let (status, body) = harness.chat("How to treat a burn?").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["response"],
        "Cool the burn under cool running water for 20 minutes. Do not apply ice."
    );
}

#[tokio::test]
async fn unmatched_query_falls_back_to_generation() {
    let harness =
        TestHarness::with_generator(MockGenerator::new().with_reply("Rest and apply a cold pack."));

    let (status, body) = harness.chat("knee swollen since yesterday").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Rest and apply a cold pack.");
    assert_eq!(
        harness.generator.calls(),
        vec!["Emergency context: knee swollen since yesterday".to_string()]
    );
}

#[tokio::test]
async fn generation_failure_returns_service_unavailable() {
    let harness = TestHarness::with_generator(MockGenerator::new().failing());

    let (status, body) = harness.chat("knee swollen since yesterday").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({"error": "generation unavailable"}));
}

#[tokio::test]
async fn generation_timeout_returns_service_unavailable() {
    let harness = TestHarness::with_dependencies(
        TestDependencies::new()
            .mock_generator(MockGenerator::new().with_delay(Duration::from_secs(5)))
            .with_generation_timeout(Duration::from_millis(20)),
    );

    let (status, body) = harness.chat("knee swollen since yesterday").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "generation unavailable");
}

#[tokio::test]
async fn health_reports_dataset_counts() {
    let harness = TestHarness::new();

    let (status, bytes) = harness.get("/health").await;
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["intents"], 3);
    assert_eq!(body["examples"], 7);
    assert_eq!(body["services"], 3);
    assert_eq!(body["hospitals"], 5);
}

#[tokio::test]
async fn chat_page_is_served() {
    let harness = TestHarness::new();

    let (status, bytes) = harness.get("/").await;
    let page = String::from_utf8(bytes).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("/chat"));
}
