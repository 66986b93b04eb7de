//! Token service module for JWT management
//!
//! This module handles the full lifecycle of authentication tokens:
//! - issuing signed, time-limited tokens for a verified identity
//! - parsing and validating tokens presented on later requests
//! - refreshing a token into a new expiration window

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
