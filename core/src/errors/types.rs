//! Domain-specific error types for token management
//!
//! This module provides error type definitions for token parsing and
//! issuance. Request-facing callers never see these directly: the token
//! service folds them into absent values or conservative booleans.

use thiserror::Error;

/// Token-related errors
///
/// These errors represent the ways a presented token can fail
/// verification, plus the (unexpected) signing failure path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    InvalidSignature,

    #[error("Invalid token claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    GenerationFailed,
}
