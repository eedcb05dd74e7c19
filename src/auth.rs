use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::error::ApiError;
use crate::handler::AppState;

/// Rejects any request whose `Authorization` header is not exactly
/// `Bearer <token>` for the configured token. Mounted ahead of the
/// bookmark routes, so a bad credential answers 401 before any body
/// parsing or store access.
pub async fn require_bearer_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| token == state.api_token.as_str());

    if !authorized {
        tracing::error!(path = %request.uri().path(), "unauthorized request");
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}
