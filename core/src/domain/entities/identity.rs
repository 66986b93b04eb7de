//! Authenticated identity entity.

use serde::{Deserialize, Serialize};

/// Identity of an employee whose credentials have already been verified
/// by the identity provider.
///
/// The token service only reads this; verifying credentials against
/// stored employees is the persistence layer's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedIdentity {
    /// Unique login name
    pub username: String,

    /// Authority labels in the order they were granted
    pub authorities: Vec<String>,
}

impl AuthenticatedIdentity {
    /// Creates a new identity
    pub fn new(username: impl Into<String>, authorities: Vec<String>) -> Self {
        Self {
            username: username.into(),
            authorities,
        }
    }

    /// The authority label embedded in issued tokens.
    ///
    /// Tokens carry a single `role` claim; when an identity holds
    /// several authorities the last one granted wins. `None` when the
    /// identity has no authorities at all.
    pub fn primary_role(&self) -> Option<&str> {
        self.authorities.last().map(String::as_str)
    }
}
