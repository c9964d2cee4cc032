//! HTTP handlers for decision endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::middleware::RequireAuth;
use crate::application::handlers::decision::{
    AnalyzeDecisionHandler, DeleteDecisionHandler, GetDecisionHandler, ListDecisionsHandler,
    SaveDecisionHandler,
};
use crate::domain::decision::DecisionRequest;
use crate::domain::foundation::DecisionId;
use crate::ports::RepositoryError;

use super::dto::{
    DeleteDecisionResponse, ErrorResponse, HealthResponse, SaveDecisionRequest,
    SaveDecisionResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DecisionHandlers {
    analyze_handler: Arc<AnalyzeDecisionHandler>,
    save_handler: Arc<SaveDecisionHandler>,
    list_handler: Arc<ListDecisionsHandler>,
    get_handler: Arc<GetDecisionHandler>,
    delete_handler: Arc<DeleteDecisionHandler>,
}

impl DecisionHandlers {
    pub fn new(
        analyze_handler: Arc<AnalyzeDecisionHandler>,
        save_handler: Arc<SaveDecisionHandler>,
        list_handler: Arc<ListDecisionsHandler>,
        get_handler: Arc<GetDecisionHandler>,
        delete_handler: Arc<DeleteDecisionHandler>,
    ) -> Self {
        Self {
            analyze_handler,
            save_handler,
            list_handler,
            get_handler,
            delete_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET / - Health check
pub async fn health_check(State(handlers): State<DecisionHandlers>) -> Response {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        ai_service: handlers.analyze_handler.provider_name().to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /analyze-decision - Analyze a decision (public, for demo use)
pub async fn analyze_decision(
    State(handlers): State<DecisionHandlers>,
    Json(request): Json<DecisionRequest>,
) -> Response {
    if let Err(e) = request.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response();
    }

    match handlers.analyze_handler.handle(&request).await {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "analysis failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal(
                    "Analysis failed due to an internal server error.",
                )),
            )
                .into_response()
        }
    }
}

/// POST /save-decision - Save a decision analysis (authenticated)
pub async fn save_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Json(request): Json<SaveDecisionRequest>,
) -> Response {
    if let Err(e) = request.decision_input.validate() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(e.to_string())),
        )
            .into_response();
    }

    match handlers
        .save_handler
        .handle(user.id, request.decision_input, request.analysis_result)
        .await
    {
        Ok(decision_id) => {
            let response = SaveDecisionResponse {
                decision_id: decision_id.to_string(),
                status: "saved".to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_repository_error(e, "Failed to save decision"),
    }
}

/// GET /decisions - List the caller's saved decisions (authenticated)
pub async fn get_decisions(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
) -> Response {
    match handlers.list_handler.handle(&user.id).await {
        Ok(decisions) => (StatusCode::OK, Json(decisions)).into_response(),
        Err(e) => handle_repository_error(e, "Failed to fetch decisions"),
    }
}

/// GET /decisions/:id - Fetch one saved decision (authenticated)
pub async fn get_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(decision_id): Path<String>,
) -> Response {
    let decision_id = match decision_id.parse::<DecisionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid decision_id format.")),
            )
                .into_response()
        }
    };

    match handlers.get_handler.handle(&decision_id, &user.id).await {
        Ok(Some(decision)) => (StatusCode::OK, Json(decision)).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(
                "Decision not found or access denied.",
            )),
        )
            .into_response(),
        Err(e) => handle_repository_error(e, "Failed to fetch decision"),
    }
}

/// DELETE /decisions/:id - Delete a saved decision (authenticated)
pub async fn delete_decision(
    State(handlers): State<DecisionHandlers>,
    RequireAuth(user): RequireAuth,
    Path(decision_id): Path<String>,
) -> Response {
    let decision_id = match decision_id.parse::<DecisionId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid decision_id format.")),
            )
                .into_response()
        }
    };

    match handlers.delete_handler.handle(&decision_id, &user.id).await {
        Ok(true) => {
            let response = DeleteDecisionResponse {
                status: "deleted".to_string(),
                decision_id: decision_id.to_string(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Ok(false) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found(
                "Decision not found or access denied.",
            )),
        )
            .into_response(),
        Err(e) => handle_repository_error(e, "Failed to delete decision"),
    }
}

fn handle_repository_error(error: RepositoryError, context: &str) -> Response {
    tracing::error!(error = %error, "{context}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal(format!(
            "{context} due to an internal server error."
        ))),
    )
        .into_response()
}
