//! Bcrypt-backed `PasswordHasher` adapter.

use crate::domain::ports::{PasswordHashError, PasswordHasher};
use crate::domain::{PasswordHash, RawPassword};

/// Work factor for new hashes. Verification reads the factor from the stored
/// hash, so raising this only affects newly registered chefs.
pub const BCRYPT_COST: u32 = 7;

/// Bcrypt implementation of the password hashing port.
#[derive(Debug, Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self { cost: BCRYPT_COST }
    }
}

impl BcryptPasswordHasher {
    /// Create a hasher with an explicit work factor.
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &RawPassword) -> Result<PasswordHash, PasswordHashError> {
        bcrypt::hash(password.expose(), self.cost)
            .map(PasswordHash::new)
            .map_err(|err| PasswordHashError::hash(err.to_string()))
    }

    fn verify(
        &self,
        password: &RawPassword,
        hash: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password.expose(), hash.as_str())
            .map_err(|err| PasswordHashError::verify(err.to_string()))
    }
}
