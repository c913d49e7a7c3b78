//! Port abstraction for recipe persistence.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use crate::domain::{Recipe, RecipeId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by recipe repository adapters.
    pub enum RecipePersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "recipe repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "recipe repository query failed: {message}",
    }
}

/// Recipe store port.
///
/// Category matching is case-insensitive and exact; name matching is
/// case-insensitive substring. Both list operations return results ordered by
/// timestamp descending (id descending as tiebreak); `find_all` preserves
/// insertion order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    /// Fetch a recipe by id.
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipePersistenceError>;

    /// List every recipe in insertion order.
    async fn find_all(&self) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// List recipes whose category equals `category`, ignoring case.
    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// List recipes whose name contains `fragment`, ignoring case.
    async fn find_by_name_contains(
        &self,
        fragment: &str,
    ) -> Result<Vec<Recipe>, RecipePersistenceError>;

    /// Insert the recipe when its id is absent, otherwise fully replace the
    /// stored record. Returns the (possibly newly assigned) id.
    async fn save(&self, recipe: &Recipe) -> Result<RecipeId, RecipePersistenceError>;

    /// Whether a recipe with this id exists.
    async fn exists_by_id(&self, id: RecipeId) -> Result<bool, RecipePersistenceError>;

    /// Remove the recipe and its element collections.
    async fn delete_by_id(&self, id: RecipeId) -> Result<(), RecipePersistenceError>;
}

/// In-memory recipe store used when no database is configured, and by handler
/// tests. Implements the same matching and ordering contract as the
/// SQL-backed adapter.
#[derive(Debug)]
pub struct InMemoryRecipeRepository {
    // BTreeMap keys ascend, which doubles as insertion order because ids are
    // allocated monotonically.
    recipes: Mutex<BTreeMap<i64, Recipe>>,
    next_id: AtomicI64,
}

impl Default for InMemoryRecipeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRecipeRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            recipes: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn newest_first(mut matches: Vec<Recipe>) -> Vec<Recipe> {
        matches.sort_by(|a, b| {
            b.updated_at()
                .cmp(&a.updated_at())
                .then_with(|| b.id().cmp(&a.id()))
        });
        matches
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipePersistenceError> {
        let recipes = self
            .recipes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(recipes.get(&id.get()).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let recipes = self
            .recipes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(recipes.values().cloned().collect())
    }

    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let wanted = category.to_lowercase();
        let recipes = self
            .recipes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let matches = recipes
            .values()
            .filter(|recipe| recipe.category().to_lowercase() == wanted)
            .cloned()
            .collect();
        Ok(Self::newest_first(matches))
    }

    async fn find_by_name_contains(
        &self,
        fragment: &str,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let wanted = fragment.to_lowercase();
        let recipes = self
            .recipes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let matches = recipes
            .values()
            .filter(|recipe| recipe.name().to_lowercase().contains(&wanted))
            .cloned()
            .collect();
        Ok(Self::newest_first(matches))
    }

    async fn save(&self, recipe: &Recipe) -> Result<RecipeId, RecipePersistenceError> {
        let id = recipe
            .id()
            .unwrap_or_else(|| RecipeId::new(self.next_id.fetch_add(1, Ordering::SeqCst)));
        let stored = Recipe::persisted(
            id,
            recipe.content().clone(),
            recipe.author().clone(),
            recipe.updated_at(),
        );
        let mut recipes = self
            .recipes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        recipes.insert(id.get(), stored);
        Ok(id)
    }

    async fn exists_by_id(&self, id: RecipeId) -> Result<bool, RecipePersistenceError> {
        let recipes = self
            .recipes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(recipes.contains_key(&id.get()))
    }

    async fn delete_by_id(&self, id: RecipeId) -> Result<(), RecipePersistenceError> {
        let mut recipes = self
            .recipes
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        recipes.remove(&id.get());
        Ok(())
    }
}
