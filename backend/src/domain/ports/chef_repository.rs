//! Port abstraction for chef credential persistence.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Chef, ChefEmail};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by chef repository adapters.
    pub enum ChefPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "chef repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "chef repository query failed: {message}",
    }
}

/// Credential store port.
///
/// Email uniqueness is the primary-key invariant; a duplicate insert is not
/// surfaced distinctly from a generic failure, so callers pre-check existence
/// via [`ChefRepository::find_by_email`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChefRepository: Send + Sync {
    /// Fetch a chef by email.
    async fn find_by_email(&self, email: &ChefEmail)
    -> Result<Option<Chef>, ChefPersistenceError>;

    /// Insert or update a chef record in a single atomic operation.
    async fn save(&self, chef: &Chef) -> Result<(), ChefPersistenceError>;
}

/// In-memory credential store used when no database is configured, and by
/// handler tests.
#[derive(Debug, Default)]
pub struct InMemoryChefRepository {
    chefs: Mutex<HashMap<String, Chef>>,
}

impl InMemoryChefRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ChefRepository for InMemoryChefRepository {
    async fn find_by_email(
        &self,
        email: &ChefEmail,
    ) -> Result<Option<Chef>, ChefPersistenceError> {
        let chefs = self
            .chefs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(chefs.get(email.as_ref()).cloned())
    }

    async fn save(&self, chef: &Chef) -> Result<(), ChefPersistenceError> {
        let mut chefs = self
            .chefs
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        chefs.insert(chef.email().as_ref().to_owned(), chef.clone());
        Ok(())
    }
}
