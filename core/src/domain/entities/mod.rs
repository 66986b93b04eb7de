//! Domain entities representing core business objects.

pub mod identity;
pub mod token;

// Re-export commonly used types
pub use identity::AuthenticatedIdentity;
pub use token::Claims;
