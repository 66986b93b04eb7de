//! Error types shared across server crates.

use thiserror::Error;

/// Configuration errors detected during startup validation.
///
/// Every variant is fatal: the process must refuse to start rather than
/// serve requests with a broken signing setup. None of these surface as
/// per-request errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing configuration value: {name}")]
    MissingValue { name: String },

    #[error("Invalid configuration value for {name}: {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ConfigError {
    /// Shorthand for a missing required setting.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingValue { name: name.into() }
    }

    /// Shorthand for a setting that is present but unusable.
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_value_display() {
        let err = ConfigError::missing("JWT_SECRET");
        assert_eq!(err.to_string(), "Missing configuration value: JWT_SECRET");
    }

    #[test]
    fn test_invalid_value_display() {
        let err = ConfigError::invalid("JWT_EXPIRATION_SECONDS", "must be at least 1 second");
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for JWT_EXPIRATION_SECONDS: must be at least 1 second"
        );
    }
}
