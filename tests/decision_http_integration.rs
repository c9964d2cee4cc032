//! Integration tests for decision HTTP endpoints.
//!
//! These tests drive the assembled router end to end with the heuristic
//! provider, the in-memory repository, and a mock session validator:
//! request validation, authentication outcomes, and the full
//! save/list/get/delete round trip.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use pathfinder::adapters::ai::HeuristicAnalysisProvider;
use pathfinder::adapters::auth::MockSessionValidator;
use pathfinder::adapters::http::{build_router, decision::DecisionHandlers};
use pathfinder::adapters::memory::InMemoryDecisionRepository;
use pathfinder::application::handlers::decision::{
    AnalyzeDecisionHandler, DeleteDecisionHandler, GetDecisionHandler, ListDecisionsHandler,
    SaveDecisionHandler,
};
use pathfinder::config::ServerConfig;
use pathfinder::domain::foundation::AuthError;
use pathfinder::ports::{DecisionRepository, SessionValidator};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn build_app(validator: Arc<dyn SessionValidator>) -> Router {
    let repository: Arc<dyn DecisionRepository> = Arc::new(InMemoryDecisionRepository::new());
    let handlers = DecisionHandlers::new(
        Arc::new(AnalyzeDecisionHandler::new(Arc::new(
            HeuristicAnalysisProvider::new(),
        ))),
        Arc::new(SaveDecisionHandler::new(repository.clone())),
        Arc::new(ListDecisionsHandler::new(repository.clone())),
        Arc::new(GetDecisionHandler::new(repository.clone())),
        Arc::new(DeleteDecisionHandler::new(repository)),
    );
    build_router(handlers, validator, &ServerConfig::default())
}

fn default_app() -> Router {
    build_app(Arc::new(
        MockSessionValidator::new()
            .with_test_user("alice-token", "user-alice")
            .with_test_user("bob-token", "user-bob"),
    ))
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(value) => Body::from(serde_json::to_vec(&value).unwrap()),
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn decision_body() -> Value {
    json!({
        "title": "Job Offer",
        "context": "Deciding whether to accept a new role at another company.",
        "options": ["Stay", "Leave"],
        "priorities": [
            {"name": "Growth", "weight": 8, "description": "Career growth"}
        ]
    })
}

fn save_body(analysis: Value) -> Value {
    json!({
        "decision_input": decision_body(),
        "analysis_result": analysis
    })
}

fn minimal_analysis() -> Value {
    json!({
        "scores": [],
        "summary": "A summary of the analysis.",
        "reasoning": "Reasoning text.",
        "confidence": 60.0,
        "recommended_option": "Stay"
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_provider_kind() {
    let response = default_app()
        .oneshot(json_request(Method::GET, "/", None, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["ai_service"], "heuristic");
    assert!(body["version"].as_str().is_some());
}

// =============================================================================
// Analyze
// =============================================================================

#[tokio::test]
async fn analyze_returns_complete_record() {
    let response = default_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze-decision",
            None,
            Some(decision_body()),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;

    let scores = body["scores"].as_array().unwrap();
    assert_eq!(scores.len(), 2);
    let options: Vec<&str> = scores
        .iter()
        .map(|s| s["option"].as_str().unwrap())
        .collect();
    assert_eq!(options, vec!["Stay", "Leave"]);

    let recommended = body["recommended_option"].as_str().unwrap();
    assert!(options.contains(&recommended));

    let confidence = body["confidence"].as_f64().unwrap();
    assert!((60.0..=95.0).contains(&confidence));

    for score in scores {
        assert_eq!(
            score["priority_scores"].as_object().unwrap().len(),
            1,
            "exactly the requested priorities"
        );
        assert!(!score["strengths"].as_array().unwrap().is_empty());
        assert!(!score["weaknesses"].as_array().unwrap().is_empty());
        assert!(!score["risks"].as_array().unwrap().is_empty());
        assert!(!score["opportunities"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn analyze_is_public() {
    // No Authorization header at all.
    let response = default_app()
        .oneshot(json_request(
            Method::POST,
            "/analyze-decision",
            None,
            Some(decision_body()),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn analyze_rejects_single_option() {
    let mut body = decision_body();
    body["options"] = json!(["Only one"]);

    let response = default_app()
        .oneshot(json_request(Method::POST, "/analyze-decision", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn analyze_rejects_too_many_options() {
    let mut body = decision_body();
    body["options"] = json!(["A", "B", "C", "D", "E", "F"]);

    let response = default_app()
        .oneshot(json_request(Method::POST, "/analyze-decision", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analyze_rejects_short_context() {
    let mut body = decision_body();
    body["context"] = json!("short");

    let response = default_app()
        .oneshot(json_request(Method::POST, "/analyze-decision", None, Some(body)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Authentication outcomes
// =============================================================================

#[tokio::test]
async fn save_without_token_is_unauthenticated() {
    let response = default_app()
        .oneshot(json_request(
            Method::POST,
            "/save-decision",
            None,
            Some(save_body(minimal_analysis())),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["code"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn save_with_invalid_token_is_rejected() {
    let response = default_app()
        .oneshot(json_request(
            Method::POST,
            "/save-decision",
            Some("bogus-token"),
            Some(save_body(minimal_analysis())),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["code"], "AUTH_ERROR");
    assert_eq!(body["error"], "Invalid token");
}

#[tokio::test]
async fn expired_token_is_distinguished() {
    let app = build_app(Arc::new(
        MockSessionValidator::new().with_error(AuthError::TokenExpired),
    ));

    let response = app
        .oneshot(json_request(
            Method::GET,
            "/decisions",
            Some("some-token"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Token expired");
}

#[tokio::test]
async fn missing_auth_secret_is_server_fault() {
    let app = build_app(Arc::new(
        MockSessionValidator::new().with_error(AuthError::Misconfigured),
    ));

    let response = app
        .oneshot(json_request(
            Method::GET,
            "/decisions",
            Some("some-token"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

// =============================================================================
// Save / list / get / delete round trip
// =============================================================================

#[tokio::test]
async fn save_list_get_delete_round_trip() {
    let app = default_app();

    // Analyze to obtain a real record.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/analyze-decision",
            None,
            Some(decision_body()),
        ))
        .await
        .unwrap();
    let analysis = response_json(response).await;

    // Save it as alice.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/save-decision",
            Some("alice-token"),
            Some(save_body(analysis)),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "saved");
    let decision_id = body["decision_id"].as_str().unwrap().to_string();

    // Alice sees it in her list.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::GET,
            "/decisions",
            Some("alice-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let listed = response_json(response).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["title"], "Job Offer");

    // Alice can fetch it directly.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::GET,
            &format!("/decisions/{decision_id}"),
            Some("alice-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Bob cannot see alice's decision.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::GET,
            &format!("/decisions/{decision_id}"),
            Some("bob-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Alice deletes it.
    let response = app
        .clone()
        .oneshot(json_request(
            Method::DELETE,
            &format!("/decisions/{decision_id}"),
            Some("alice-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["status"], "deleted");

    // It is gone afterwards.
    let response = app
        .oneshot(json_request(
            Method::GET,
            &format!("/decisions/{decision_id}"),
            Some("alice-token"),
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_with_invalid_uuid_is_bad_request() {
    let response = default_app()
        .oneshot(json_request(
            Method::GET,
            "/decisions/not-a-uuid",
            Some("alice-token"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid decision_id format.");
}

#[tokio::test]
async fn delete_unknown_decision_is_not_found() {
    let response = default_app()
        .oneshot(json_request(
            Method::DELETE,
            "/decisions/7f1f9be0-0000-4000-8000-000000000000",
            Some("alice-token"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_is_empty_for_new_user() {
    let response = default_app()
        .oneshot(json_request(
            Method::GET,
            "/decisions",
            Some("bob-token"),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}
