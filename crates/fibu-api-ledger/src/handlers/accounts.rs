//! Account endpoints.
//!
//! GET /accounts - List the caller's accounts.
//! PUT /accounts - Apply a batch of account changes.

use axum::{extract::State, http::StatusCode, Extension, Json};
use fibu_db::{Account, AccountStore, DbError, PgStore};

use crate::error::ApiLedgerError;
use crate::middleware::ProjectContext;
use crate::models::{AccountResponse, UpdateAccountsRequest};
use crate::router::LedgerState;
use crate::services::reconcile_accounts;

/// Lists the accounts of the caller's project.
///
/// Accounts whose stored number is not numeric are omitted from this
/// read-only view.
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "Accounts of the caller's project", body = [AccountResponse]),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Accounts"
)]
pub async fn list_accounts_handler(
    State(state): State<LedgerState>,
    Extension(project): Extension<ProjectContext>,
) -> Result<Json<Vec<AccountResponse>>, ApiLedgerError> {
    let accounts = Account::find_by_project(&state.pool, project.project_id.into())
        .await
        .map_err(DbError::QueryFailed)?;

    let result = accounts.iter().filter_map(AccountResponse::from_account);
    Ok(Json(result.collect()))
}

/// Applies a batch of account changes to the caller's project.
///
/// The whole batch runs in one transaction: either every persisted mutation
/// commits or a storage fault aborts all of them. Per-entry business-rule
/// violations are silently skipped; no per-entry outcome is reported.
#[utoipa::path(
    put,
    path = "/accounts",
    request_body = UpdateAccountsRequest,
    responses(
        (status = 204, description = "Batch applied"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Storage fault, batch aborted", body = crate::error::ErrorResponse),
    ),
    security(("bearerAuth" = [])),
    tag = "Accounts"
)]
pub async fn update_accounts_handler(
    State(state): State<LedgerState>,
    Extension(project): Extension<ProjectContext>,
    Json(request): Json<UpdateAccountsRequest>,
) -> Result<StatusCode, ApiLedgerError> {
    let updates = request.accounts.unwrap_or_default();
    tracing::info!(
        project_id = %project.project_id,
        entries = updates.len(),
        "Applying account batch"
    );

    let mut store = PgStore::begin(&state.pool).await?;
    let existing = store.list_accounts(project.project_id).await?;
    reconcile_accounts(&mut store, project.project_id, existing, &updates).await?;
    store.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
