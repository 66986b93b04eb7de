//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Default token validity window (1 hour)
pub const DEFAULT_EXPIRATION_SECONDS: i64 = 3600;

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
///
/// Loaded once at process startup and never mutated afterwards; the
/// token service receives a read-only copy at construction.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Token validity window in seconds
    pub expiration_seconds: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            expiration_seconds: DEFAULT_EXPIRATION_SECONDS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set the validity window in seconds
    pub fn with_expiration_seconds(mut self, seconds: i64) -> Self {
        self.expiration_seconds = seconds;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }

    /// Load from `JWT_SECRET` and `JWT_EXPIRATION_SECONDS`.
    ///
    /// A missing secret or an unparseable expiration is a fatal startup
    /// error, never a per-request one.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::missing("JWT_SECRET"))?;

        let expiration_seconds = match std::env::var("JWT_EXPIRATION_SECONDS") {
            Ok(raw) => raw.parse().map_err(|_| {
                ConfigError::invalid("JWT_EXPIRATION_SECONDS", format!("not an integer: {raw}"))
            })?,
            Err(_) => DEFAULT_EXPIRATION_SECONDS,
        };

        let config = Self {
            secret,
            expiration_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    /// Startup validation of the signing setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::missing("JWT_SECRET"));
        }
        if self.expiration_seconds < 1 {
            return Err(ConfigError::invalid(
                "JWT_EXPIRATION_SECONDS",
                "must be at least 1 second",
            ));
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            jwt: JwtConfig::from_env()?,
        })
    }

    /// Get JWT secret
    pub fn jwt_secret(&self) -> &str {
        &self.jwt.secret
    }

    /// Get token validity window in seconds
    pub fn expiration_seconds(&self) -> i64 {
        self.jwt.expiration_seconds
    }
}
