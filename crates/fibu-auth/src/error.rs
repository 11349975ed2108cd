//! Error types for the fibu-auth crate.

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The signing or verification key could not be loaded.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// The token failed to decode or its signature did not verify.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// The token is expired.
    #[error("Token expired")]
    TokenExpired,
}

impl AuthError {
    /// Check if this error indicates an expired token.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        matches!(self, AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expired_error_display() {
        let err = AuthError::TokenExpired;
        assert_eq!(err.to_string(), "Token expired");
        assert!(err.is_expired());
        assert!(!AuthError::InvalidKey("x".into()).is_expired());
    }
}
