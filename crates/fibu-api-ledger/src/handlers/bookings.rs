//! Booking endpoints.
//!
//! GET /bookings - List the caller's bookings.
//! PUT /bookings - Apply a batch of booking changes.

use axum::{extract::State, http::StatusCode, Extension, Json};
use fibu_db::{Account, AccountStore, Booking, BookingStore, DbError, PgStore};
use std::collections::HashMap;

use crate::error::ApiLedgerError;
use crate::middleware::ProjectContext;
use crate::models::{BookingResponse, UpdateBookingsRequest};
use crate::router::LedgerState;
use crate::services::{index_by_account_number, reconcile_bookings};

/// Lists the bookings of the caller's project.
///
/// Account references whose stored number is not numeric are returned as
/// null; no booking is dropped from the list.
#[utoipa::path(
    get,
    path = "/bookings",
    responses(
        (status = 200, description = "Bookings of the caller's project", body = [BookingResponse]),
        (status = 401, description = "Not authenticated"),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn list_bookings_handler(
    State(state): State<LedgerState>,
    Extension(project): Extension<ProjectContext>,
) -> Result<Json<Vec<BookingResponse>>, ApiLedgerError> {
    let bookings = Booking::find_by_project(&state.pool, project.project_id.into())
        .await
        .map_err(DbError::QueryFailed)?;
    let accounts = Account::find_by_project(&state.pool, project.project_id.into())
        .await
        .map_err(DbError::QueryFailed)?;

    let numbers_by_account: HashMap<i64, String> = accounts
        .into_iter()
        .map(|account| (account.id, account.account_number))
        .collect();

    let result = bookings
        .iter()
        .map(|booking| BookingResponse::from_booking(booking, &numbers_by_account))
        .collect();
    Ok(Json(result))
}

/// Applies a batch of booking changes to the caller's project.
///
/// Account references are resolved against the project's accounts as loaded
/// at the start of the batch transaction. The whole batch commits
/// atomically; per-entry business-rule violations are silently skipped.
#[utoipa::path(
    put,
    path = "/bookings",
    request_body = UpdateBookingsRequest,
    responses(
        (status = 204, description = "Batch applied"),
        (status = 401, description = "Not authenticated"),
        (status = 500, description = "Storage fault, batch aborted", body = crate::error::ErrorResponse),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn update_bookings_handler(
    State(state): State<LedgerState>,
    Extension(project): Extension<ProjectContext>,
    Json(request): Json<UpdateBookingsRequest>,
) -> Result<StatusCode, ApiLedgerError> {
    let updates = request.entries.unwrap_or_default();
    tracing::info!(
        project_id = %project.project_id,
        entries = updates.len(),
        "Applying booking batch"
    );

    let mut store = PgStore::begin(&state.pool).await?;
    let existing = store.list_bookings(project.project_id).await?;
    let accounts = store.list_accounts(project.project_id).await?;
    let accounts_by_number = index_by_account_number(accounts);

    reconcile_bookings(
        &mut store,
        project.project_id,
        existing,
        &accounts_by_number,
        &updates,
    )
    .await?;
    store.commit().await?;

    Ok(StatusCode::NO_CONTENT)
}
