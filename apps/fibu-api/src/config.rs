//! Application configuration loaded from environment variables.
//!
//! Fail-fast loading with validation: required variables must be present
//! and valid or the application exits with a clear error message.

use std::env;
use thiserror::Error;

/// Configuration errors that can occur during environment loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to parse port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string.
    pub database_url: String,

    /// PEM-encoded RS256 public key for bearer token verification.
    pub jwt_public_key: String,

    /// Bind address (default: "0.0.0.0").
    pub host: String,

    /// Listen port (default: 8080).
    pub port: u16,

    /// Log level filter (default: "info").
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required variables are missing
    /// - Values are invalid (e.g., invalid port number)
    ///
    /// # Required Variables
    ///
    /// - `DATABASE_URL` - PostgreSQL connection string
    /// - `JWT_PUBLIC_KEY` - RS256 public key (PEM format)
    ///
    /// # Optional Variables
    ///
    /// - `RUST_LOG` - Log level filter (default: "info")
    /// - `HOST` - Bind address (default: "0.0.0.0")
    /// - `PORT` - Listen port (default: 8080)
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (development only)
        let _ = dotenvy::dotenv();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?;

        let jwt_public_key = env::var("JWT_PUBLIC_KEY")
            .map_err(|_| ConfigError::MissingVar("JWT_PUBLIC_KEY".to_string()))?;

        // Validate PEM format (basic check)
        if !jwt_public_key.contains("-----BEGIN") {
            return Err(ConfigError::InvalidValue {
                var: "JWT_PUBLIC_KEY".to_string(),
                message: "Must be PEM format (should contain -----BEGIN)".to_string(),
            });
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()?;

        if port == 0 {
            return Err(ConfigError::InvalidValue {
                var: "PORT".to_string(),
                message: "Port must be between 1 and 65535".to_string(),
            });
        }

        let rust_log = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            jwt_public_key,
            host,
            port,
            rust_log,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Environment variables are process-global, so everything runs in one
    // test to avoid interleaving.
    #[test]
    fn config_loading_from_env() {
        // Missing DATABASE_URL
        env::remove_var("DATABASE_URL");
        env::remove_var("JWT_PUBLIC_KEY");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref v) if v == "DATABASE_URL"));

        // Missing JWT_PUBLIC_KEY
        env::set_var("DATABASE_URL", "postgres://localhost/fibu");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref v) if v == "JWT_PUBLIC_KEY"));

        // Non-PEM key is rejected
        env::set_var("JWT_PUBLIC_KEY", "not a pem key");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref var, .. } if var == "JWT_PUBLIC_KEY"));

        // Defaults apply once required variables are present
        env::set_var("JWT_PUBLIC_KEY", "-----BEGIN PUBLIC KEY-----\n...");
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("RUST_LOG");
        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");

        // Invalid and zero ports are rejected
        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidPort(_)
        ));
        env::set_var("PORT", "0");
        assert!(matches!(
            Config::from_env().unwrap_err(),
            ConfigError::InvalidValue { ref var, .. } if var == "PORT"
        ));

        env::set_var("PORT", "9090");
        let config = Config::from_env().unwrap();
        assert_eq!(config.port, 9090);
    }
}
