//! fibu Ledger API
//!
//! Project-scoped account and booking endpoints. The write endpoints accept
//! sparse batch-update payloads where field *presence* carries meaning
//! (create, update or delete); the reconciliation services in [`services`]
//! turn such a batch into concrete storage operations.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod services;

pub use error::ApiLedgerError;
pub use middleware::{
    jwt_auth_middleware, project_context_middleware, JwtPublicKey, ProjectContext,
};
pub use router::{ledger_router, LedgerState};
