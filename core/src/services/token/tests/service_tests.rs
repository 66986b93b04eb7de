//! Unit tests for the token service

use chrono::Utc;

use crate::domain::entities::identity::AuthenticatedIdentity;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};
use crate::repositories::identity::mock::MockIdentityProvider;
use crate::repositories::IdentityProvider;
use crate::services::token::{TokenService, TokenServiceConfig};

fn create_test_service() -> TokenService {
    TokenService::new(TokenServiceConfig::default()).expect("failed to create token service")
}

fn service_with(secret: &str, validity_seconds: i64) -> TokenService {
    TokenService::new(TokenServiceConfig {
        secret: secret.to_string(),
        validity_seconds,
    })
    .expect("failed to create token service")
}

fn alice() -> AuthenticatedIdentity {
    AuthenticatedIdentity::new("alice", vec!["ROLE_USER".to_string()])
}

/// Encodes a token whose window ended `seconds_ago` seconds in the past.
fn expired_token(service: &TokenService, seconds_ago: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "alice".to_string(),
        role: Some("ROLE_USER".to_string()),
        created: now - seconds_ago - 3600,
        exp: now - seconds_ago,
    };
    service.encode(&claims).unwrap()
}

#[test]
fn test_issue_and_read_subject() {
    let service = create_test_service();
    let token = service.issue(&alice()).unwrap();

    assert_eq!(service.subject(&token), Some("alice".to_string()));
}

#[test]
fn test_issue_sets_role_and_expiration_window() {
    let service = create_test_service();
    let before = Utc::now().timestamp();
    let token = service.issue(&alice()).unwrap();
    let after = Utc::now().timestamp();

    let claims = service.parse_claims(&token).unwrap();
    assert_eq!(claims.role, Some("ROLE_USER".to_string()));
    assert!(claims.created >= before && claims.created <= after);
    assert_eq!(claims.exp, claims.created + 3600);
}

#[test]
fn test_issue_without_authorities_omits_role() {
    let service = create_test_service();
    let token = service
        .issue(&AuthenticatedIdentity::new("bob", vec![]))
        .unwrap();

    let claims = service.parse_claims(&token).unwrap();
    assert_eq!(claims.role, None);
}

#[test]
fn test_issue_keeps_last_authority_label() {
    let service = create_test_service();
    let identity = AuthenticatedIdentity::new(
        "carol",
        vec!["ROLE_ADMIN".to_string(), "ROLE_USER".to_string()],
    );
    let token = service.issue(&identity).unwrap();

    let claims = service.parse_claims(&token).unwrap();
    assert_eq!(claims.role, Some("ROLE_USER".to_string()));
}

#[test]
fn test_token_valid_immediately_after_issue() {
    let service = create_test_service();
    let token = service.issue(&alice()).unwrap();

    assert!(service.is_valid(&token));
    assert!(!service.is_expired(&token));
}

#[test]
fn test_expired_token_reported_expired() {
    let service = create_test_service();
    let token = expired_token(&service, 10);

    assert!(service.is_expired(&token));
    assert!(!service.is_valid(&token));
    // Structure is still readable
    assert_eq!(service.subject(&token), Some("alice".to_string()));
}

#[test]
fn test_garbage_token_subject_and_expiration_absent() {
    let service = create_test_service();

    assert_eq!(service.subject("not-a-token"), None);
    assert_eq!(service.expiration("not-a-token"), None);
    assert!(matches!(
        service.parse_claims("not-a-token"),
        Err(TokenError::Malformed)
    ));
}

#[test]
fn test_unparseable_token_reported_valid() {
    // Longstanding wire behavior: expiry cannot be read from a garbled
    // token, so `is_expired` fails open and `is_valid` reports true.
    // Authorization always has to pair this check with `subject`.
    let service = create_test_service();

    assert!(!service.is_expired("garbage"));
    assert!(service.is_valid("garbage"));
    assert_eq!(service.subject("garbage"), None);
}

#[test]
fn test_refresh_garbage_token_absent() {
    let service = create_test_service();
    assert_eq!(service.refresh("garbage"), None);
}

#[test]
fn test_token_signed_with_other_secret_rejected() {
    let issuer = service_with("s1", 3600);
    let verifier = service_with("s2", 3600);

    let token = issuer.issue(&alice()).unwrap();

    assert!(matches!(
        verifier.parse_claims(&token),
        Err(TokenError::InvalidSignature)
    ));
    assert_eq!(verifier.subject(&token), None);
}

#[test]
fn test_tampered_token_rejected() {
    let service = create_test_service();
    let token = service.issue(&alice()).unwrap();

    // Flip a character inside the payload segment
    let mut segments: Vec<String> = token.split('.').map(str::to_string).collect();
    assert_eq!(segments.len(), 3);
    let payload = &segments[1];
    let flipped = if payload.starts_with('A') { "B" } else { "A" };
    segments[1] = format!("{}{}", flipped, &payload[1..]);
    let tampered = segments.join(".");

    assert!(service.parse_claims(&tampered).is_err());
    assert_eq!(service.subject(&tampered), None);
}

#[test]
fn test_refresh_preserves_subject_and_extends_expiration() {
    let service = create_test_service();

    // An older token, issued part-way through its window
    let now = Utc::now().timestamp();
    let original = Claims {
        sub: "alice".to_string(),
        role: Some("ROLE_USER".to_string()),
        created: now - 600,
        exp: now + 3000,
    };
    let token = service.encode(&original).unwrap();

    let refreshed = service.refresh(&token).unwrap();
    let claims = service.parse_claims(&refreshed).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.role, Some("ROLE_USER".to_string()));
    assert!(claims.created > original.created);
    assert!(claims.exp > original.exp);
    assert!(service.is_valid(&refreshed));
}

#[test]
fn test_refresh_succeeds_after_expiry() {
    // No expiry check before refreshing: an expired but structurally
    // valid token still yields a replacement with a full new window.
    let service = create_test_service();
    let token = expired_token(&service, 120);
    assert!(service.is_expired(&token));

    let before = Utc::now().timestamp();
    let refreshed = service.refresh(&token).unwrap();

    let claims = service.parse_claims(&refreshed).unwrap();
    assert_eq!(claims.sub, "alice");
    assert!(claims.exp >= before + 3600);
    assert!(!service.is_expired(&refreshed));
}

#[test]
fn test_issue_scenario_with_configured_secret() {
    let service = service_with("s1", 3600);
    let before = Utc::now().timestamp();
    let token = service.issue(&alice()).unwrap();
    let after = Utc::now().timestamp();

    // A second service sharing the secret decodes the same token
    let peer = service_with("s1", 3600);
    let claims = peer.parse_claims(&token).unwrap();

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.role, Some("ROLE_USER".to_string()));
    assert!(claims.exp >= before + 3600 && claims.exp <= after + 3600);

    let expiration = peer.expiration(&token).unwrap();
    assert_eq!(expiration.timestamp(), claims.exp);
}

#[test]
fn test_tokens_from_same_identity_independently_valid() {
    // No revocation list exists: every issued token stands on its own
    // until its own expiration.
    let service = create_test_service();
    let first = service.issue(&alice()).unwrap();
    let second = service.issue(&alice()).unwrap();

    assert!(service.is_valid(&first));
    assert!(service.is_valid(&second));
    assert_eq!(service.subject(&first), service.subject(&second));
}

#[test]
fn test_issue_for_identity_from_provider() {
    let provider = MockIdentityProvider::new();
    provider.insert(alice());
    let service = create_test_service();

    let identity = provider.identity_by_username("alice").unwrap().unwrap();
    let token = service.issue(&identity).unwrap();

    assert_eq!(service.subject(&token), Some("alice".to_string()));
}

#[test]
fn test_misconfigured_service_rejected_at_startup() {
    let empty_secret = TokenService::new(TokenServiceConfig {
        secret: String::new(),
        validity_seconds: 3600,
    });
    assert!(matches!(empty_secret, Err(DomainError::Config(_))));

    let zero_validity = TokenService::new(TokenServiceConfig {
        secret: "s1".to_string(),
        validity_seconds: 0,
    });
    assert!(zero_validity.is_err());
}
