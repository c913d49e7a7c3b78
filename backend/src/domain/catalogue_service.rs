//! Recipe catalog services implementing the query and command driving ports.
//!
//! Thin mediation over the repository ports: queries pass straight through,
//! commands add the ownership rules. The caller identity arrives as an
//! explicit parameter on every command; nothing here holds per-request state.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{
    ChefPersistenceError, ChefRepository, RecipeCommand, RecipePersistenceError, RecipeQuery,
    RecipeRepository,
};
use crate::domain::{ChefEmail, Error, Recipe, RecipeDraft, RecipeId};

fn map_recipe_repository_error(error: RecipePersistenceError) -> Error {
    Error::internal(format!("recipe repository error: {error}"))
}

fn map_chef_repository_error(error: ChefPersistenceError) -> Error {
    Error::internal(format!("chef repository error: {error}"))
}

/// Read-side catalog service.
#[derive(Clone)]
pub struct RecipeQueryService<R> {
    recipes: Arc<R>,
}

impl<R> RecipeQueryService<R> {
    /// Create a query service over the recipe store.
    pub fn new(recipes: Arc<R>) -> Self {
        Self { recipes }
    }
}

#[async_trait]
impl<R> RecipeQuery for RecipeQueryService<R>
where
    R: RecipeRepository,
{
    async fn get(&self, id: RecipeId) -> Result<Recipe, Error> {
        self.recipes
            .find_by_id(id)
            .await
            .map_err(map_recipe_repository_error)?
            .ok_or_else(|| Error::not_found(format!("recipe {id} not found")))
    }

    async fn list_all(&self) -> Result<Vec<Recipe>, Error> {
        self.recipes
            .find_all()
            .await
            .map_err(map_recipe_repository_error)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Recipe>, Error> {
        self.recipes
            .find_by_category(category)
            .await
            .map_err(map_recipe_repository_error)
    }

    async fn list_by_name(&self, fragment: &str) -> Result<Vec<Recipe>, Error> {
        self.recipes
            .find_by_name_contains(fragment)
            .await
            .map_err(map_recipe_repository_error)
    }
}

/// Write-side catalog service enforcing ownership.
#[derive(Clone)]
pub struct RecipeCommandService<R, C> {
    recipes: Arc<R>,
    chefs: Arc<C>,
}

impl<R, C> RecipeCommandService<R, C> {
    /// Create a command service over the recipe and chef stores.
    pub fn new(recipes: Arc<R>, chefs: Arc<C>) -> Self {
        Self { recipes, chefs }
    }
}

impl<R, C> RecipeCommandService<R, C>
where
    R: RecipeRepository,
{
    /// Load the recipe at `id` and enforce that `caller` owns it.
    async fn load_owned(&self, caller: &ChefEmail, id: RecipeId) -> Result<Recipe, Error> {
        let existing = self
            .recipes
            .find_by_id(id)
            .await
            .map_err(map_recipe_repository_error)?
            .ok_or_else(|| Error::not_found(format!("recipe {id} not found")))?;
        if !existing.is_owned_by(caller) {
            return Err(Error::forbidden(
                "only the owning chef may modify this recipe",
            ));
        }
        Ok(existing)
    }
}

#[async_trait]
impl<R, C> RecipeCommand for RecipeCommandService<R, C>
where
    R: RecipeRepository,
    C: ChefRepository,
{
    async fn create(&self, author: &ChefEmail, draft: RecipeDraft) -> Result<RecipeId, Error> {
        let chef = self
            .chefs
            .find_by_email(author)
            .await
            .map_err(map_chef_repository_error)?;
        if chef.is_none() {
            return Err(Error::not_found("chef not found"));
        }

        let recipe = Recipe::new(draft, author.clone(), Utc::now());
        self.recipes
            .save(&recipe)
            .await
            .map_err(map_recipe_repository_error)
    }

    async fn update(
        &self,
        caller: &ChefEmail,
        id: RecipeId,
        draft: RecipeDraft,
    ) -> Result<RecipeId, Error> {
        let existing = self.load_owned(caller, id).await?;
        // Full replace: id forced to the path value, owner carried over from
        // the stored record, timestamp refreshed.
        let replacement = Recipe::persisted(id, draft, existing.author().clone(), Utc::now());
        self.recipes
            .save(&replacement)
            .await
            .map_err(map_recipe_repository_error)
    }

    async fn delete(&self, caller: &ChefEmail, id: RecipeId) -> Result<(), Error> {
        self.load_owned(caller, id).await?;
        // Existence is re-verified so a concurrent delete after the owner
        // check still surfaces as 404 rather than silently succeeding twice.
        let exists = self
            .recipes
            .exists_by_id(id)
            .await
            .map_err(map_recipe_repository_error)?;
        if !exists {
            return Err(Error::not_found(format!("recipe {id} not found")));
        }
        self.recipes
            .delete_by_id(id)
            .await
            .map_err(map_recipe_repository_error)
    }
}
