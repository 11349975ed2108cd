//! JWT encoding and decoding with RS256.

use crate::claims::JwtClaims;
use crate::error::AuthError;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

/// Configuration for JWT validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Leeway in seconds for exp/iat validation (clock skew tolerance).
    pub leeway: u64,
    /// Expected issuer (if set, tokens with a different issuer are rejected).
    pub issuer: Option<String>,
    /// Expected audience (if set, tokens without a matching audience are rejected).
    pub audience: Option<Vec<String>>,
    /// Whether to validate expiration.
    pub validate_exp: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            leeway: 60, // 60 seconds clock skew tolerance
            issuer: None,
            audience: None,
            validate_exp: true,
        }
    }
}

impl ValidationConfig {
    /// Set the expected issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.issuer = Some(iss.into());
        self
    }

    /// Set the expected audience.
    #[must_use]
    pub fn audience(mut self, aud: Vec<impl Into<String>>) -> Self {
        self.audience = Some(aud.into_iter().map(Into::into).collect());
        self
    }

    /// Disable expiration validation (use with caution).
    #[must_use]
    pub fn skip_exp_validation(mut self) -> Self {
        self.validate_exp = false;
        self
    }

    fn to_validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.leeway = self.leeway;
        validation.validate_exp = self.validate_exp;
        if let Some(iss) = &self.issuer {
            validation.set_issuer(&[iss]);
        }
        match &self.audience {
            Some(aud) => validation.set_audience(aud),
            // jsonwebtoken requires aud validation by default; the claims
            // struct carries aud, so only check it when configured.
            None => validation.validate_aud = false,
        }
        validation
    }
}

/// Encode JWT claims into a signed token string using RS256.
///
/// # Errors
///
/// Returns [`AuthError::InvalidKey`] if the private key PEM is invalid and
/// [`AuthError::InvalidToken`] if signing fails.
pub fn encode_token(claims: &JwtClaims, private_key_pem: &[u8]) -> Result<String, AuthError> {
    let key = EncodingKey::from_rsa_pem(private_key_pem)
        .map_err(|e| AuthError::InvalidKey(format!("Invalid private key: {e}")))?;

    encode(&Header::new(Algorithm::RS256), claims, &key)
        .map_err(|e| AuthError::InvalidToken(format!("Encoding failed: {e}")))
}

/// Decode and validate a JWT token against an RSA public key.
///
/// # Errors
///
/// - [`AuthError::InvalidKey`] - the public key PEM is invalid
/// - [`AuthError::TokenExpired`] - the token is past its `exp`
/// - [`AuthError::InvalidToken`] - any other validation failure
pub fn decode_token(
    token: &str,
    public_key_pem: &[u8],
    config: &ValidationConfig,
) -> Result<JwtClaims, AuthError> {
    let key = DecodingKey::from_rsa_pem(public_key_pem)
        .map_err(|e| AuthError::InvalidKey(format!("Invalid public key: {e}")))?;

    decode::<JwtClaims>(token, &key, &config.to_validation())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken(format!("Decoding failed: {e}")),
        })
}
