//! Bearer-token authentication.
//!
//! A token goes through signature, expiry and subject checks in that order:
//!
//! ```text
//! Received -> SignatureChecked -> ExpiryChecked -> SubjectResolved -> Authorized
//!     \______________\_______________\_________________\_______> Rejected(reason)
//! ```

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::credentials::UserService;
use crate::db::User;
use crate::{NoticeboardError, Result};

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID).
    pub sub: i64,
    /// Email of the subject when the token was issued.
    pub email: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

/// Identity handed to request handlers once a token is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    /// ID of the resolved user.
    pub user_id: i64,
    /// Email of the resolved user.
    pub email: String,
}

/// Why a token was turned away.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No bearer token was presented.
    #[error("missing bearer token")]
    Missing,

    /// The token could not be decoded.
    #[error("malformed token")]
    Malformed,

    /// The signature does not match the shared secret.
    #[error("invalid token signature")]
    BadSignature,

    /// The token is past its expiry time.
    #[error("token has expired")]
    Expired,

    /// The subject does not name an existing user.
    #[error("user not found")]
    UnknownSubject,
}

impl From<jsonwebtoken::errors::Error> for AuthRejection {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                AuthRejection::BadSignature
            }
            ErrorKind::ExpiredSignature => AuthRejection::Expired,
            _ => AuthRejection::Malformed,
        }
    }
}

/// Pull the token out of an `Authorization` header value.
///
/// The scheme is matched case-insensitively.
pub fn extract_bearer(header_value: &str) -> Option<&str> {
    let (scheme, token) = header_value.trim().split_once(' ')?;
    let token = token.trim();
    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

/// Issues and verifies HS256 access tokens.
#[derive(Clone)]
pub struct AuthStrategy {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    token_expiry_secs: u64,
    users: UserService,
}

impl AuthStrategy {
    /// Create a strategy from the shared secret.
    pub fn new(secret: &str, token_expiry_secs: u64, users: UserService) -> Self {
        let mut validation = Validation::default();
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            token_expiry_secs,
            users,
        }
    }

    /// Access token lifetime in seconds.
    pub fn token_expiry_secs(&self) -> u64 {
        self.token_expiry_secs
    }

    /// Sign an access token for `user`.
    pub fn issue_token(&self, user: &User) -> Result<String> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = TokenClaims {
            sub: user.id,
            email: user.email.clone(),
            iat: now,
            exp: now + self.token_expiry_secs,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| NoticeboardError::Token(e.to_string()))
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify(&self, token: &str) -> std::result::Result<TokenClaims, AuthRejection> {
        decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(AuthRejection::from)
    }

    /// Run the full check and resolve the subject to a user.
    pub async fn authorize(&self, token: &str) -> Result<AuthenticatedUser> {
        let claims = self.verify(token).inspect_err(|reason| {
            debug!(%reason, "Token rejected");
        })?;

        let Some(user) = self.users.find_by_id(claims.sub).await? else {
            debug!(user_id = claims.sub, "Token subject does not exist");
            return Err(AuthRejection::UnknownSubject.into());
        };

        Ok(AuthenticatedUser {
            user_id: user.id,
            email: user.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{Database, UserRepository};
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    const SECRET: &str = "test-secret";

    async fn setup() -> (AuthStrategy, User) {
        let db = Database::open_in_memory().await.unwrap();
        let users = UserService::new(UserRepository::new(db.pool().clone()));
        let user = users
            .create("alice@example.com", "password123", "Alice")
            .await
            .unwrap();
        (AuthStrategy::new(SECRET, 3600, users), user)
    }

    fn sign(secret: &str, claims: &TokenClaims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_for(sub: i64, exp_offset: i64) -> TokenClaims {
        let now = chrono::Utc::now().timestamp();
        TokenClaims {
            sub,
            email: "alice@example.com".to_string(),
            iat: now as u64,
            exp: (now + exp_offset) as u64,
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn test_extract_bearer() {
        assert_eq!(extract_bearer("Bearer abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_bearer("bearer abc"), Some("abc"));
        assert_eq!(extract_bearer("Basic dXNlcjpwYXNz"), None);
        assert_eq!(extract_bearer("Bearer "), None);
        assert_eq!(extract_bearer("Bearer"), None);
        assert_eq!(extract_bearer(""), None);
    }

    #[tokio::test]
    async fn test_issue_and_authorize() {
        let (strategy, user) = setup().await;
        let token = strategy.issue_token(&user).unwrap();

        let identity = strategy.authorize(&token).await.unwrap();
        assert_eq!(
            identity,
            AuthenticatedUser {
                user_id: user.id,
                email: "alice@example.com".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_issued_claims() {
        let (strategy, user) = setup().await;
        let token = strategy.issue_token(&user).unwrap();

        let claims = strategy.verify(&token).unwrap();
        assert_eq!(claims.sub, user.id);
        assert_eq!(claims.exp - claims.iat, 3600);
        assert!(!claims.jti.is_empty());
    }

    #[tokio::test]
    async fn test_wrong_secret_is_bad_signature() {
        let (strategy, user) = setup().await;
        let token = sign("another-secret", &claims_for(user.id, 3600));

        assert_eq!(strategy.verify(&token).unwrap_err(), AuthRejection::BadSignature);
    }

    #[tokio::test]
    async fn test_tampered_payload_is_bad_signature() {
        let (strategy, user) = setup().await;
        let token = strategy.issue_token(&user).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let mut forged = claims_for(user.id, 3600);
        forged.sub = user.id + 1;
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());
        let tampered = format!("{}.{}.{}", parts[0], payload, parts[2]);

        assert_eq!(
            strategy.verify(&tampered).unwrap_err(),
            AuthRejection::BadSignature
        );
    }

    #[tokio::test]
    async fn test_expired_token() {
        let (strategy, user) = setup().await;
        let token = sign(SECRET, &claims_for(user.id, -3600));

        let result = strategy.authorize(&token).await;
        assert!(matches!(
            result,
            Err(NoticeboardError::Unauthorized(AuthRejection::Expired))
        ));
    }

    #[tokio::test]
    async fn test_malformed_token() {
        let (strategy, _user) = setup().await;

        assert_eq!(
            strategy.verify("not-a-jwt").unwrap_err(),
            AuthRejection::Malformed
        );
        assert_eq!(
            strategy.verify("aaa.bbb.ccc").unwrap_err(),
            AuthRejection::Malformed
        );
    }

    #[tokio::test]
    async fn test_unknown_subject() {
        let (strategy, user) = setup().await;
        let token = sign(SECRET, &claims_for(user.id + 100, 3600));

        let result = strategy.authorize(&token).await;
        assert!(matches!(
            result,
            Err(NoticeboardError::Unauthorized(AuthRejection::UnknownSubject))
        ));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(AuthRejection::Missing.to_string(), "missing bearer token");
        assert_eq!(AuthRejection::Expired.to_string(), "token has expired");
        assert_eq!(AuthRejection::UnknownSubject.to_string(), "user not found");
    }
}
