//! Main token service implementation

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{debug, warn};

use crate::domain::entities::identity::AuthenticatedIdentity;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service managing the lifecycle of HS512-signed bearer tokens
///
/// Stateless: every operation is a pure function of the token text, the
/// shared secret, the configured validity window and the current time.
/// A single instance can be shared across request handlers without
/// coordination; nothing here blocks on I/O.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Arguments
    ///
    /// * `config` - Token service configuration
    ///
    /// # Errors
    ///
    /// Configuration problems (empty secret, validity below one second)
    /// are fatal at startup; the caller must abort instead of running
    /// with a broken signing setup.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        config.validate()?;

        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // Expiry is applied manually by `is_expired`: a structurally
        // valid but expired token must still parse and refresh.
        let mut validation = Validation::new(Algorithm::HS512);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Ok(Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        })
    }

    /// Issues a signed token for a verified identity
    ///
    /// The claim set carries the username as subject, the identity's
    /// last authority label as `role` (omitted when it has none) and
    /// the issuance timestamp; the expiration is the configured
    /// validity window from now.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The compact signed token
    /// * `Err(DomainError)` - Signing failed (not expected for valid input)
    pub fn issue(&self, identity: &AuthenticatedIdentity) -> DomainResult<String> {
        let claims = Claims::new(
            identity.username.clone(),
            identity.primary_role().map(str::to_owned),
            self.validity(),
        );

        let token = self.encode(&claims)?;
        debug!(subject = %claims.sub, "issued token");
        Ok(token)
    }

    /// Verifies the signature and decodes the claim set
    ///
    /// Expired tokens decode successfully; expiry is a separate policy
    /// check applied by `is_expired`.
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - The verified claim set
    /// * `Err(TokenError)` - Malformed token, signature mismatch, or
    ///   undecodable claims
    pub fn parse_claims(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature
                | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken
                | jsonwebtoken::errors::ErrorKind::Base64(_)
                | jsonwebtoken::errors::ErrorKind::Utf8(_) => TokenError::Malformed,
                _ => TokenError::InvalidClaims,
            })
    }

    /// Subject claim of a token, or `None` when the token cannot be
    /// parsed
    pub fn subject(&self, token: &str) -> Option<String> {
        self.parse_claims(token).ok().map(|claims| claims.sub)
    }

    /// Expiration instant of a token, or `None` when the token cannot
    /// be parsed
    pub fn expiration(&self, token: &str) -> Option<DateTime<Utc>> {
        self.parse_claims(token)
            .ok()
            .and_then(|claims| claims.expires_at())
    }

    /// Whether the token's expiration lies strictly in the past
    ///
    /// A token without a readable expiration (one that fails to parse)
    /// is treated as not expired; only a structurally valid,
    /// time-expired token fails this check.
    pub fn is_expired(&self, token: &str) -> bool {
        match self.parse_claims(token) {
            Ok(claims) => claims.is_expired(),
            Err(_) => false,
        }
    }

    /// Whether the token is still inside its validity window
    ///
    /// Exactly `!is_expired(token)`: an unparseable token is reported
    /// valid here even though `subject` returns `None` for it.
    /// Authorization must always pair this check with a successful
    /// subject lookup.
    pub fn is_valid(&self, token: &str) -> bool {
        !self.is_expired(token)
    }

    /// Re-issues a token with a fresh issuance timestamp and a new
    /// expiration window, keeping subject and role unchanged
    ///
    /// Expiry is deliberately not checked: a structurally valid token
    /// can still be refreshed after it has expired.
    ///
    /// # Returns
    ///
    /// * `Some(String)` - The replacement token
    /// * `None` - The presented token did not parse
    pub fn refresh(&self, token: &str) -> Option<String> {
        let claims = match self.parse_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                debug!("refusing to refresh unparseable token: {e}");
                return None;
            }
        };

        match self.encode(&claims.refreshed(self.validity())) {
            Ok(refreshed) => {
                debug!(subject = %claims.sub, "refreshed token");
                Some(refreshed)
            }
            Err(e) => {
                warn!("token refresh failed: {e}");
                None
            }
        }
    }

    fn validity(&self) -> Duration {
        Duration::seconds(self.config.validity_seconds)
    }

    /// Encodes claims into a compact HS512-signed token
    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS512);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| TokenError::GenerationFailed.into())
    }
}
