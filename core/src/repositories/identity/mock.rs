//! In-memory identity provider for testing.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::identity::AuthenticatedIdentity;
use crate::errors::DomainResult;

use super::IdentityProvider;

/// Mock implementation of `IdentityProvider` backed by a `HashMap`
#[derive(Default)]
pub struct MockIdentityProvider {
    identities: Mutex<HashMap<String, AuthenticatedIdentity>>,
}

impl MockIdentityProvider {
    /// Creates an empty provider
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an identity, replacing any previous entry for the
    /// same username
    pub fn insert(&self, identity: AuthenticatedIdentity) {
        let mut identities = self.identities.lock().unwrap();
        identities.insert(identity.username.clone(), identity);
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn identity_by_username(&self, username: &str) -> DomainResult<Option<AuthenticatedIdentity>> {
        let identities = self.identities.lock().unwrap();
        Ok(identities.get(username).cloned())
    }
}
