//! HTTP adapter: router assembly and middleware.

pub mod decision;
pub mod middleware;

use axum::Router;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

use decision::{decision_routes, DecisionHandlers};
use middleware::{auth_middleware, AuthState};

/// Assembles the application router with auth, trace, CORS, and timeout
/// layers applied.
pub fn build_router(
    handlers: DecisionHandlers,
    validator: AuthState,
    server: &ServerConfig,
) -> Router {
    decision_routes(handlers)
        .layer(axum::middleware::from_fn_with_state(
            validator,
            auth_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(server.request_timeout()))
}

/// CORS policy: explicit origins when configured, permissive otherwise.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_accepts_configured_origins() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:3000,https://pathfinder.vercel.app".to_string()),
            ..Default::default()
        };
        // Construction must not panic with explicit origins.
        let _ = cors_layer(&server);
    }

    #[test]
    fn cors_layer_defaults_to_permissive() {
        let _ = cors_layer(&ServerConfig::default());
    }
}
