//! Configuration for the token service

use tk_shared::config::JwtConfig;
use tk_shared::errors::ConfigError;

/// Configuration for the token service
///
/// Built once at startup and handed to `TokenService::new`; read-only
/// for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub secret: String,
    /// Token validity window in seconds
    pub validity_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            validity_seconds: 3600,
        }
    }
}

impl TokenServiceConfig {
    /// Builds a service config from the application-level JWT settings
    pub fn from_jwt_config(jwt: &JwtConfig) -> Self {
        Self {
            secret: jwt.secret.clone(),
            validity_seconds: jwt.expiration_seconds,
        }
    }

    /// Startup validation of the signing setup.
    ///
    /// An empty secret or a sub-second validity window must prevent the
    /// process from starting; neither is recoverable per-request.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.trim().is_empty() {
            return Err(ConfigError::missing("jwt.secret"));
        }
        if self.validity_seconds < 1 {
            return Err(ConfigError::invalid(
                "jwt.expiration_seconds",
                "must be at least 1 second",
            ));
        }
        Ok(())
    }
}
