//! Identity provider trait definition.

use crate::domain::entities::identity::AuthenticatedIdentity;
use crate::errors::DomainResult;

/// Source of verified identities.
///
/// Implemented by the authentication layer that checks credentials
/// against stored employees; the token service only consumes the
/// resulting identity.
pub trait IdentityProvider: Send + Sync {
    /// Looks up the verified identity for a username.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(identity))` - The username maps to a known identity
    /// * `Ok(None)` - The username is unknown
    /// * `Err(DomainError)` - The underlying store failed
    fn identity_by_username(&self, username: &str) -> DomainResult<Option<AuthenticatedIdentity>>;
}
