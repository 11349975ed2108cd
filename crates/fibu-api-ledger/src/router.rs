//! Ledger API router configuration.
//!
//! Configures the project-scoped routes:
//! - GET /accounts - List accounts
//! - PUT /accounts - Apply an account batch
//! - GET /bookings - List bookings
//! - PUT /bookings - Apply a booking batch
//!
//! All routes run behind the project-context middleware; the JWT
//! authentication layer is applied by the binary around this router.

use axum::{middleware, routing::get, Router};
use sqlx::PgPool;

use crate::handlers::{
    list_accounts_handler, list_bookings_handler, update_accounts_handler,
    update_bookings_handler,
};
use crate::middleware::project_context_middleware;

/// Application state for the ledger routes.
#[derive(Clone)]
pub struct LedgerState {
    /// Database connection pool.
    pub pool: PgPool,
}

impl LedgerState {
    /// Create a new ledger state.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Create the ledger router with all endpoints.
pub fn ledger_router(state: LedgerState) -> Router {
    Router::new()
        .route(
            "/accounts",
            get(list_accounts_handler).put(update_accounts_handler),
        )
        .route(
            "/bookings",
            get(list_bookings_handler).put(update_bookings_handler),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            project_context_middleware,
        ))
        .with_state(state)
}
