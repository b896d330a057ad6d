//! User accounts and password checks.

use std::sync::OnceLock;

use tracing::info;

use super::password::{hash_password, verify_password};
use crate::db::{NewUser, User, UserRepository};
use crate::{NoticeboardError, Result};

/// Service for user storage and credential verification.
#[derive(Debug, Clone)]
pub struct UserService {
    repo: UserRepository,
}

impl UserService {
    /// Create a new UserService over the given repository.
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    /// Register a user.
    ///
    /// Fails with `Conflict` if the email is taken; the existing account is
    /// left untouched. Only the Argon2 hash of `password` is stored.
    pub async fn create(&self, email: &str, password: &str, name: &str) -> Result<User> {
        if self.repo.email_exists(email).await? {
            return Err(NoticeboardError::Conflict(
                "email already registered".to_string(),
            ));
        }

        let password_hash = hash_password(password)?;
        let user = self
            .repo
            .create(&NewUser::new(email, password_hash, name))
            .await?;

        info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Look a user up by email.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.repo.get_by_email(email).await
    }

    /// Look a user up by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.repo.get_by_id(id).await
    }

    /// Check an email and password pair.
    ///
    /// Returns `None` for an unknown email or a wrong password. An unknown
    /// email is still checked against a dummy hash so both cases cost one
    /// Argon2 verification.
    pub async fn authenticate(&self, email: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = self.repo.get_by_email(email).await? else {
            let _ = verify_password(password, dummy_hash()?);
            return Ok(None);
        };

        if self.validate_password(password, &user.password) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// True iff `plain` matches the stored `hash`.
    ///
    /// A malformed hash is treated as a mismatch.
    pub fn validate_password(&self, plain: &str, hash: &str) -> bool {
        verify_password(plain, hash).is_ok()
    }
}

/// Hash verified when a login names no known user.
fn dummy_hash() -> Result<&'static str> {
    static DUMMY_HASH: OnceLock<String> = OnceLock::new();

    if let Some(hash) = DUMMY_HASH.get() {
        return Ok(hash.as_str());
    }
    let hash = hash_password("noticeboard-unknown-user")?;
    Ok(DUMMY_HASH.get_or_init(|| hash).as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    async fn setup_service() -> UserService {
        let db = Database::open_in_memory().await.unwrap();
        UserService::new(UserRepository::new(db.pool().clone()))
    }

    #[tokio::test]
    async fn test_create_stores_hash_not_plaintext() {
        let service = setup_service().await;
        let user = service
            .create("alice@example.com", "correct horse", "Alice")
            .await
            .unwrap();

        assert_ne!(user.password, "correct horse");
        assert!(user.password.starts_with("$argon2id$"));
        assert!(service.validate_password("correct horse", &user.password));
    }

    #[tokio::test]
    async fn test_create_duplicate_email_is_conflict() {
        let service = setup_service().await;
        let original = service
            .create("alice@example.com", "password-one", "Alice")
            .await
            .unwrap();

        let result = service
            .create("alice@example.com", "password-two", "Impostor")
            .await;
        assert!(matches!(result, Err(NoticeboardError::Conflict(_))));

        let stored = service
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, original.id);
        assert_eq!(stored.name, "Alice");
        assert_eq!(stored.password, original.password);
    }

    #[tokio::test]
    async fn test_find_absent_users() {
        let service = setup_service().await;
        assert!(service.find_by_id(1).await.unwrap().is_none());
        assert!(service
            .find_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let service = setup_service().await;
        let user = service
            .create("bob@example.com", "password", "Bob")
            .await
            .unwrap();

        let found = service.find_by_id(user.id).await.unwrap().unwrap();
        assert_eq!(found.email, "bob@example.com");
    }

    #[tokio::test]
    async fn test_validate_password() {
        let service = setup_service().await;
        let user = service
            .create("carol@example.com", "s3cret!", "Carol")
            .await
            .unwrap();

        assert!(service.validate_password("s3cret!", &user.password));
        assert!(!service.validate_password("s3cret?", &user.password));
        assert!(!service.validate_password("s3cret", &user.password));
        assert!(!service.validate_password("s3cret!", "garbage"));
    }

    #[tokio::test]
    async fn test_authenticate() {
        let service = setup_service().await;
        let user = service
            .create("dave@example.com", "password123", "Dave")
            .await
            .unwrap();

        let found = service
            .authenticate("dave@example.com", "password123")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, user.id);

        assert!(service
            .authenticate("dave@example.com", "password124")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .authenticate("nobody@example.com", "password123")
            .await
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_dummy_hash_is_real_argon2() {
        let hash = dummy_hash().unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("password123", hash).is_err());
        assert_eq!(dummy_hash().unwrap(), hash);
    }
}
