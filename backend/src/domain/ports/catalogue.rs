//! Driving ports for recipe catalog use-cases.
//!
//! Queries are unauthenticated reads; commands take the caller's identity
//! explicitly so authorization decisions stay inside the domain and no shared
//! mutable "current chef" exists anywhere.

use async_trait::async_trait;

use crate::domain::{ChefEmail, Error, Recipe, RecipeDraft, RecipeId};

/// Read side of the recipe catalog.
#[async_trait]
pub trait RecipeQuery: Send + Sync {
    /// Fetch one recipe. Fails with `NotFound` when absent.
    async fn get(&self, id: RecipeId) -> Result<Recipe, Error>;

    /// List every recipe in insertion order.
    async fn list_all(&self) -> Result<Vec<Recipe>, Error>;

    /// List recipes by exact category, ignoring case, newest first.
    async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>, Error>;

    /// List recipes whose name contains the fragment, ignoring case, newest
    /// first.
    async fn list_by_name(&self, fragment: &str) -> Result<Vec<Recipe>, Error>;
}

/// Write side of the recipe catalog.
#[async_trait]
pub trait RecipeCommand: Send + Sync {
    /// Create a recipe owned by `author` with a server-assigned timestamp.
    /// Fails with `NotFound` when the author has no chef record.
    async fn create(&self, author: &ChefEmail, draft: RecipeDraft) -> Result<RecipeId, Error>;

    /// Fully replace the recipe at `id`. The owner is preserved from the
    /// existing record and the timestamp is refreshed. Fails with `NotFound`
    /// when absent and `Forbidden` when `caller` is not the owner.
    async fn update(
        &self,
        caller: &ChefEmail,
        id: RecipeId,
        draft: RecipeDraft,
    ) -> Result<RecipeId, Error>;

    /// Delete the recipe at `id`. Existence is re-verified before the delete;
    /// same failure modes as [`RecipeCommand::update`].
    async fn delete(&self, caller: &ChefEmail, id: RecipeId) -> Result<(), Error>;
}
