//! JWT authentication middleware.
//!
//! Verifies the bearer credential and inserts the decoded [`JwtClaims`]
//! into request extensions. Any failure aborts the request with 401 before
//! a handler (and thus any reconciliation) runs.

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use fibu_auth::{decode_token, ValidationConfig};
use std::sync::Arc;

/// PEM-encoded RSA public key used to verify incoming tokens.
///
/// Provided to the middleware via an `Extension` layer.
#[derive(Clone)]
pub struct JwtPublicKey(pub Arc<String>);

/// Middleware that requires a valid RS256 bearer token.
///
/// # Errors
///
/// - `500` when no [`JwtPublicKey`] extension is configured
/// - `401` for a missing/malformed Authorization header, an empty token, or
///   a token that fails validation
pub async fn jwt_auth_middleware(
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let public_key = request
        .extensions()
        .get::<JwtPublicKey>()
        .cloned()
        .ok_or_else(|| {
            tracing::error!("JWT public key not configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server configuration error",
            )
                .into_response()
        })?;

    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            (StatusCode::UNAUTHORIZED, "Missing Authorization header").into_response()
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        (
            StatusCode::UNAUTHORIZED,
            "Invalid Authorization header format",
        )
            .into_response()
    })?;

    if token.is_empty() {
        tracing::warn!("Rejected empty bearer token");
        return Err((StatusCode::UNAUTHORIZED, "Empty bearer token").into_response());
    }

    let claims = decode_token(token, public_key.0.as_bytes(), &ValidationConfig::default())
        .map_err(|e| {
            tracing::warn!(error = %e, "Rejected bearer token");
            (StatusCode::UNAUTHORIZED, "Invalid token").into_response()
        })?;

    tracing::debug!(project_key = %claims.sub, "Bearer token verified");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
