//! Bearer-token middleware and the `RequireAuth` extractor.
//!
//! The middleware validates any presented token through the
//! `SessionValidator` port and stores the resulting user in request
//! extensions. A request without a token passes through untouched, so
//! public routes keep working; handlers that need a caller identity take
//! `RequireAuth`, which rejects with 401 when no user was injected.
//!
//! Failure outcomes are kept distinguishable: invalid and expired tokens
//! are the caller's fault (401), a missing verification secret is the
//! server's (500).

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{request::Parts, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::SessionValidator;

/// State handed to the middleware layer.
pub type AuthState = Arc<dyn SessionValidator>;

/// Reads the bearer token out of the `Authorization` header, if any.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Validates a presented bearer token and injects the caller identity.
pub async fn auth_middleware(
    State(validator): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(request.headers()) else {
        // Anonymous request; RequireAuth rejects it later if the route
        // needs an identity.
        return next.run(request).await;
    };

    match validator.validate(token).await {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(error) => auth_failure(&error),
    }
}

fn auth_failure(error: &AuthError) -> Response {
    let status = if error.is_server_fault() {
        tracing::error!(%error, "rejecting authenticated request");
        StatusCode::INTERNAL_SERVER_ERROR
    } else {
        StatusCode::UNAUTHORIZED
    };

    (
        status,
        Json(serde_json::json!({
            "error": error.to_string(),
            "code": "AUTH_ERROR"
        })),
    )
        .into_response()
}

/// Extractor for handlers that require an authenticated caller.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection)
    }
}

/// Rejection emitted when a protected handler runs without an identity.
#[derive(Debug, Clone)]
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "error": "Authentication required",
                "code": "UNAUTHENTICATED"
            })),
        )
            .into_response()
    }
}
