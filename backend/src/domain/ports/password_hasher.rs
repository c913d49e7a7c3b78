//! Port abstraction for one-way password hashing.

use crate::domain::{PasswordHash, RawPassword};

use super::define_port_error;

define_port_error! {
    /// Failures raised by password hashing adapters.
    pub enum PasswordHashError {
        /// The hashing primitive rejected the input or its parameters.
        Hash { message: String } => "password hashing failed: {message}",
        /// The stored hash could not be parsed or compared.
        Verify { message: String } => "password verification failed: {message}",
    }
}

/// One-way adaptive password hashing port.
///
/// Verification is delegated to the hashing primitive, which performs the
/// comparison in constant time; raw passwords never reach persistence.
pub trait PasswordHasher: Send + Sync {
    /// Hash a raw password for storage.
    fn hash(&self, password: &RawPassword) -> Result<PasswordHash, PasswordHashError>;

    /// Check a raw password against a stored hash.
    fn verify(&self, password: &RawPassword, hash: &PasswordHash)
    -> Result<bool, PasswordHashError>;
}

/// Trivially reversible stand-in hasher for tests. Not a real hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixturePasswordHasher;

const FIXTURE_PREFIX: &str = "fixture:";

impl PasswordHasher for FixturePasswordHasher {
    fn hash(&self, password: &RawPassword) -> Result<PasswordHash, PasswordHashError> {
        Ok(PasswordHash::new(format!(
            "{FIXTURE_PREFIX}{}",
            password.expose()
        )))
    }

    fn verify(
        &self,
        password: &RawPassword,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        Ok(hash
            .as_str()
            .strip_prefix(FIXTURE_PREFIX)
            .is_some_and(|raw| raw == password.expose()))
    }
}
