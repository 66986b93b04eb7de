//! Token claim entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for the JWT payload
///
/// `sub` and `created` are always present; `role` is omitted from the
/// payload entirely when the identity had no authority labels. Claims
/// embedded in a token are immutable; `refreshed` works on a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (unique username)
    pub sub: String,

    /// Single authorization label, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Issuance timestamp (seconds since epoch)
    pub created: i64,

    /// Expiration timestamp (seconds since epoch)
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a freshly issued token
    ///
    /// # Arguments
    ///
    /// * `subject` - The unique username
    /// * `role` - Single authorization label, if any
    /// * `validity` - How long the token stays valid from now
    pub fn new(subject: impl Into<String>, role: Option<String>, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            role,
            created: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }

    /// Returns a copy with a fresh issuance timestamp and a new
    /// expiration window, preserving subject and role unchanged.
    pub fn refreshed(&self, validity: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: self.sub.clone(),
            role: self.role.clone(),
            created: now.timestamp(),
            exp: (now + validity).timestamp(),
        }
    }

    /// Checks if the claims have expired
    ///
    /// # Returns
    ///
    /// `true` iff the expiration timestamp is strictly in the past
    pub fn is_expired(&self) -> bool {
        self.exp < Utc::now().timestamp()
    }

    /// Issuance instant as a `DateTime`
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created, 0)
    }

    /// Expiration instant as a `DateTime`
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}
