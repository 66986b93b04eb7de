//! Shared utilities and common types for TimeKeeper server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error types for startup validation
//! - Environment and logging settings

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, Environment, JwtConfig, LogFormat, LoggingConfig};
pub use errors::ConfigError;
