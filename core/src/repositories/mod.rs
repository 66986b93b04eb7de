//! Collaborator interfaces for data access abstraction.

pub mod identity;

// Re-export commonly used types
pub use identity::IdentityProvider;
