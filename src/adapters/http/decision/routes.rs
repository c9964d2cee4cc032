//! HTTP routes for decision endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};

use super::handlers::{
    analyze_decision, delete_decision, get_decision, get_decisions, health_check,
    save_decision, DecisionHandlers,
};

/// Creates the decision router with all endpoints.
pub fn decision_routes(handlers: DecisionHandlers) -> Router {
    Router::new()
        .route("/", get(health_check))
        .route("/analyze-decision", post(analyze_decision))
        .route("/save-decision", post(save_decision))
        .route("/decisions", get(get_decisions))
        .route("/decisions/:id", get(get_decision))
        .route("/decisions/:id", delete(delete_decision))
        .with_state(handlers)
}
