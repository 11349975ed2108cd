//! Request middleware: bearer token verification and project resolution.

mod jwt_auth;
mod project_context;

pub use jwt_auth::{jwt_auth_middleware, JwtPublicKey};
pub use project_context::{project_context_middleware, ProjectContext};
