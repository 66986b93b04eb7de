//! # TimeKeeper Core
//!
//! Core business logic and domain layer for the TimeKeeper backend.
//! This crate contains the domain entities, the token service managing
//! the full lifecycle of authentication tokens, collaborator interfaces
//! and error types that form the foundation of the application
//! architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::identity::AuthenticatedIdentity;
pub use domain::entities::token::Claims;
pub use errors::{ConfigError, DomainError, DomainResult, TokenError};
pub use repositories::IdentityProvider;
pub use services::{TokenService, TokenServiceConfig};
