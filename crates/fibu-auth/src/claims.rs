//! JWT claims structure with standard claims.
//!
//! The subject (`sub`) carries the opaque project key: each credential is
//! issued for exactly one project, and the key is resolved to the owning
//! `Project` row after verification.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// JWT claims for a fibu API credential.
///
/// # Standard Claims (RFC 7519)
///
/// - `sub`: Subject - the opaque project key
/// - `iss`: Issuer
/// - `aud`: Audience
/// - `exp`: Expiration time (Unix timestamp)
/// - `iat`: Issued at (Unix timestamp)
///
/// # Example
///
/// ```
/// use fibu_auth::JwtClaims;
///
/// let claims = JwtClaims::builder()
///     .subject("project-acme")
///     .issuer("fibu")
///     .expires_in_secs(3600)
///     .build();
///
/// assert_eq!(claims.sub, "project-acme");
/// assert!(!claims.is_expired());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JwtClaims {
    /// Subject - the opaque project key.
    pub sub: String,

    /// Issuer - who created the token.
    pub iss: String,

    /// Audience - intended recipients.
    #[serde(default)]
    pub aud: Vec<String>,

    /// Expiration time as Unix timestamp.
    pub exp: i64,

    /// Issued-at time as Unix timestamp.
    pub iat: i64,
}

impl JwtClaims {
    /// Start building a set of claims.
    #[must_use]
    pub fn builder() -> JwtClaimsBuilder {
        JwtClaimsBuilder::default()
    }

    /// Whether the token has expired (no leeway applied).
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }

    /// The opaque project key carried by this credential.
    #[must_use]
    pub fn project_key(&self) -> &str {
        &self.sub
    }
}

/// Builder for [`JwtClaims`].
#[derive(Debug, Default)]
pub struct JwtClaimsBuilder {
    sub: Option<String>,
    iss: Option<String>,
    aud: Vec<String>,
    expires_in_secs: Option<i64>,
}

impl JwtClaimsBuilder {
    /// Set the subject (project key).
    #[must_use]
    pub fn subject(mut self, sub: impl Into<String>) -> Self {
        self.sub = Some(sub.into());
        self
    }

    /// Set the issuer.
    #[must_use]
    pub fn issuer(mut self, iss: impl Into<String>) -> Self {
        self.iss = Some(iss.into());
        self
    }

    /// Set the audience.
    #[must_use]
    pub fn audience(mut self, aud: Vec<impl Into<String>>) -> Self {
        self.aud = aud.into_iter().map(Into::into).collect();
        self
    }

    /// Set the token lifetime relative to now.
    #[must_use]
    pub fn expires_in_secs(mut self, secs: i64) -> Self {
        self.expires_in_secs = Some(secs);
        self
    }

    /// Build the claims. Unset fields default to empty strings and a
    /// one-hour lifetime.
    #[must_use]
    pub fn build(self) -> JwtClaims {
        let now = Utc::now();
        let lifetime = Duration::seconds(self.expires_in_secs.unwrap_or(3600));
        JwtClaims {
            sub: self.sub.unwrap_or_default(),
            iss: self.iss.unwrap_or_default(),
            aud: self.aud,
            exp: (now + lifetime).timestamp(),
            iat: now.timestamp(),
        }
    }
}
