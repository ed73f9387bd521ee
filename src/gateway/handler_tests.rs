use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

use crate::constants::TRANSEVAL_STATUS_HEADER;
use crate::embedding::SentenceEmbedder;
use crate::gateway::{AppState, create_router};
use crate::pipeline::Evaluator;
use crate::provider::{MockChatClient, MockReferenceTranslator};
use crate::scoring::SimilarityScorer;

fn router_with(reference: MockReferenceTranslator, chat: MockChatClient) -> Router {
    let scorer = SimilarityScorer::new(Arc::new(SentenceEmbedder::stub().expect("stub embedder")));
    let evaluator = Evaluator::new(Arc::new(reference), Arc::new(chat), scorer);
    create_router(AppState::new(evaluator))
}

fn default_router() -> Router {
    router_with(
        MockReferenceTranslator::returning(json!({"translations": [{"text": "こんにちは"}, {"text": "世界"}]})),
        MockChatClient::new(),
    )
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request builds")
}

fn status_header(response: &Response) -> String {
    response
        .headers()
        .get(TRANSEVAL_STATUS_HEADER)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("missing")
        .to_string()
}

async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

#[tokio::test]
async fn test_healthz() {
    let response = default_router().oneshot(get("/healthz")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), "ok");
    assert_eq!(body_json(response).await, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_ready_reports_stub_embedder() {
    let response = default_router().oneshot(get("/ready")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["components"]["embedder_mode"], "stub");
    assert_eq!(body["components"]["http"], "ready");
}

#[tokio::test]
async fn test_catalog_endpoints() {
    let router = default_router();

    let languages = body_json(router.clone().oneshot(get("/v1/languages")).await.unwrap()).await;
    let languages = languages.as_array().expect("array");
    assert_eq!(languages.len(), 11);
    assert!(languages.contains(&json!({"code": "JA-JP", "name": "Japanese"})));

    let models = body_json(router.oneshot(get("/v1/models")).await.unwrap()).await;
    assert_eq!(models.as_array().expect("array").len(), 7);
    assert_eq!(models[0]["code"], "gpt-35-turbo");
}

#[tokio::test]
async fn test_evaluate_reference_only() {
    let response = default_router()
        .oneshot(post_json(
            "/v1/evaluate",
            &json!({"text": "Hello\n\nworld", "source_language": "EN-US", "target_language": "JA-JP"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(status_header(&response), "ok");

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["reference_translation"], "こんにちは 世界");
    assert!(body.get("evaluation").is_none());
}

#[tokio::test]
async fn test_evaluate_full() {
    let router = router_with(
        MockReferenceTranslator::returning(json!({"text": "Bonjour le monde"})),
        MockChatClient::new()
            .push_content("Bonjour le monde")
            .push_content(r#"{"category": "very good", "reason": "Matches the reference closely."}"#),
    );

    let response = router
        .oneshot(post_json(
            "/v1/evaluate",
            &json!({
                "text": "Hello world",
                "source_language": "EN-US",
                "target_language": "FR-FR",
                "evaluate": true,
                "model_name": "gpt-4o"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["openai_translation"], "Bonjour le monde");
    assert_eq!(body["evaluation"]["category"], "very good");
    let score = body["similarity_score"].as_f64().expect("score");
    assert!((score - 1.0).abs() < 1e-4);
}

#[tokio::test]
async fn test_validation_failure_is_400() {
    let response = default_router()
        .oneshot(post_json(
            "/v1/evaluate",
            &json!({"text": "Hello", "source_language": "EN-US", "target_language": "JA-JP", "evaluate": true}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(status_header(&response), "validation_error");

    let body = body_json(response).await;
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("model_name is required"));
}

#[tokio::test]
async fn test_provider_failure_is_502() {
    let router = router_with(
        MockReferenceTranslator::failing("HTTP 503 Service Unavailable"),
        MockChatClient::new(),
    );

    let response = router
        .oneshot(post_json(
            "/v1/evaluate",
            &json!({"text": "Hello", "source_language": "EN-US", "target_language": "JA-JP"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(status_header(&response), "transport_error");

    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"success": false, "error": "Translation API error: HTTP 503 Service Unavailable"})
    );
}

#[tokio::test]
async fn test_judge_parse_failure_is_502() {
    let router = router_with(
        MockReferenceTranslator::returning(json!({"text": "Hallo"})),
        MockChatClient::new()
            .push_content("Hallo")
            .push_content("Sounds right to me."),
    );

    let response = router
        .oneshot(post_json(
            "/v1/evaluate",
            &json!({
                "text": "Hello",
                "source_language": "EN-US",
                "target_language": "DE-DE",
                "evaluate": true,
                "model_name": "gpt-4"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(status_header(&response), "parse_error");
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/evaluate")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = default_router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(status_header(&response), "invalid_request");
    assert_eq!(body_json(response).await["success"], false);
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let response = default_router()
        .oneshot(post_json("/v1/evaluate", &json!({"text": "Hello"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(status_header(&response), "invalid_request");
}
