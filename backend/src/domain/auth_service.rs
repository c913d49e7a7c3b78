//! Auth gateway implementation over the credential store and hashing ports.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AuthError, AuthService, ChefPersistenceError, ChefRepository, PasswordHashError,
    PasswordHasher,
};
use crate::domain::{Chef, ChefEmail, RawPassword};

fn map_repository_error(error: ChefPersistenceError) -> AuthError {
    AuthError::repository(error.to_string())
}

fn map_hashing_error(error: PasswordHashError) -> AuthError {
    AuthError::hashing(error.to_string())
}

/// Password-based auth gateway.
///
/// Registration hashes before persisting, and persists through a single
/// repository call so a partially-written chef record is never observable.
#[derive(Clone)]
pub struct PasswordAuthService<C, H> {
    chefs: Arc<C>,
    hasher: Arc<H>,
}

impl<C, H> PasswordAuthService<C, H> {
    /// Create a new gateway over the given credential store and hasher.
    pub fn new(chefs: Arc<C>, hasher: Arc<H>) -> Self {
        Self { chefs, hasher }
    }
}

#[async_trait]
impl<C, H> AuthService for PasswordAuthService<C, H>
where
    C: ChefRepository,
    H: PasswordHasher,
{
    async fn register(&self, email: &ChefEmail, password: &RawPassword) -> Result<(), AuthError> {
        let existing = self
            .chefs
            .find_by_email(email)
            .await
            .map_err(map_repository_error)?;
        if existing.is_some() {
            return Err(AuthError::email_taken());
        }

        let hash = self.hasher.hash(password).map_err(map_hashing_error)?;
        let chef = Chef::new(email.clone(), hash);
        self.chefs.save(&chef).await.map_err(map_repository_error)
    }

    async fn login(&self, email: &ChefEmail, password: &RawPassword) -> Result<(), AuthError> {
        let chef = self
            .chefs
            .find_by_email(email)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(AuthError::invalid_credentials)?;

        let matches = self
            .hasher
            .verify(password, chef.password())
            .map_err(map_hashing_error)?;
        if matches {
            Ok(())
        } else {
            Err(AuthError::invalid_credentials())
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{
        FixturePasswordHasher, InMemoryChefRepository, MockChefRepository,
    };

    fn service()
    -> PasswordAuthService<InMemoryChefRepository, FixturePasswordHasher> {
        PasswordAuthService::new(
            Arc::new(InMemoryChefRepository::new()),
            Arc::new(FixturePasswordHasher),
        )
    }

    fn email() -> ChefEmail {
        ChefEmail::new("chef@example.com").expect("valid email")
    }

    fn password() -> RawPassword {
        RawPassword::new("letmein-please").expect("valid password")
    }

    #[tokio::test]
    async fn register_then_login_succeeds() {
        let auth = service();
        auth.register(&email(), &password()).await.expect("registered");
        auth.login(&email(), &password()).await.expect("logged in");
    }

    #[tokio::test]
    async fn register_stores_a_hash_not_the_raw_password() {
        let chefs = Arc::new(InMemoryChefRepository::new());
        let auth = PasswordAuthService::new(chefs.clone(), Arc::new(FixturePasswordHasher));
        auth.register(&email(), &password()).await.expect("registered");
        let stored = chefs
            .find_by_email(&email())
            .await
            .expect("lookup succeeds")
            .expect("chef present");
        assert_ne!(stored.password().as_str(), password().expose());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected_without_overwriting() {
        let auth = service();
        auth.register(&email(), &password()).await.expect("registered");
        let err = auth
            .register(&email(), &RawPassword::new("different-pw").expect("valid"))
            .await
            .expect_err("duplicate rejected");
        assert_eq!(err, AuthError::email_taken());
        // The original credential still works.
        auth.login(&email(), &password()).await.expect("logged in");
    }

    #[tokio::test]
    async fn wrong_password_and_unknown_email_look_identical() {
        let auth = service();
        auth.register(&email(), &password()).await.expect("registered");
        let wrong = auth
            .login(&email(), &RawPassword::new("wrong-password").expect("valid"))
            .await
            .expect_err("rejected");
        let unknown = auth
            .login(
                &ChefEmail::new("ghost@example.com").expect("valid email"),
                &password(),
            )
            .await
            .expect_err("rejected");
        assert_eq!(wrong, AuthError::invalid_credentials());
        assert_eq!(unknown, wrong);
    }

    #[tokio::test]
    async fn repository_failures_surface_as_repository_errors() {
        let mut chefs = MockChefRepository::new();
        chefs
            .expect_find_by_email()
            .returning(|_| Err(ChefPersistenceError::connection("database unavailable")));
        let auth = PasswordAuthService::new(Arc::new(chefs), Arc::new(FixturePasswordHasher));
        let err = auth
            .login(&email(), &password())
            .await
            .expect_err("rejected");
        assert!(matches!(err, AuthError::Repository { .. }));
    }
}
