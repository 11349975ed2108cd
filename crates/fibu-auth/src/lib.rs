//! fibu Auth Library
//!
//! Bearer credential verification for the fibu API.
//!
//! # Modules
//!
//! - [`claims`] - JWT claims carrying the project key as the subject
//! - [`jwt`] - RS256 encode/decode with configurable validation
//! - [`error`] - Auth error types

pub mod claims;
pub mod error;
pub mod jwt;

pub use claims::JwtClaims;
pub use error::AuthError;
pub use jwt::{decode_token, encode_token, ValidationConfig};
