//! Project resolution middleware.
//!
//! Resolves the verified credential's subject (the opaque project key) to a
//! `Project` row and inserts the typed [`ProjectContext`] into request
//! extensions. Runs after [`super::jwt_auth_middleware`].

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use fibu_auth::JwtClaims;
use fibu_core::ProjectId;
use fibu_db::{DbError, Project};

use crate::error::ApiLedgerError;
use crate::router::LedgerState;

/// The resolved tenant scope of the current request.
#[derive(Debug, Clone, Copy)]
pub struct ProjectContext {
    /// The project owning all entities this request may touch.
    pub project_id: ProjectId,
}

/// Middleware that resolves the project for the authenticated subject.
///
/// The project row is provisioned on first sight: the credential was
/// already verified, so an unknown key simply means a fresh tenant.
///
/// # Errors
///
/// - `401` when no [`JwtClaims`] are present (not authenticated)
/// - `500` when the lookup fails on a storage fault
pub async fn project_context_middleware(
    State(state): State<LedgerState>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, ApiLedgerError> {
    let claims = request
        .extensions()
        .get::<JwtClaims>()
        .ok_or(ApiLedgerError::Unauthorized)?;

    let project = Project::find_or_create(&state.pool, claims.project_key())
        .await
        .map_err(DbError::QueryFailed)?;

    tracing::debug!(project_id = %project.id, "Resolved project context");
    request.extensions_mut().insert(ProjectContext {
        project_id: project.project_id(),
    });

    Ok(next.run(request).await)
}
