//! Builders assembling the HTTP state from configured adapters.

use std::sync::Arc;

use tracing::warn;

use crate::domain::ports::{InMemoryChefRepository, InMemoryRecipeRepository};
use crate::domain::{PasswordAuthService, RecipeCommandService, RecipeQueryService};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DieselChefRepository, DieselRecipeRepository};
use crate::outbound::security::BcryptPasswordHasher;

use super::ServerConfig;

/// Build the handler state: database-backed adapters when a pool is
/// configured, in-memory repositories otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let hasher = Arc::new(BcryptPasswordHasher::default());
    match &config.db_pool {
        Some(pool) => {
            let chefs = Arc::new(DieselChefRepository::new(pool.clone()));
            let recipes = Arc::new(DieselRecipeRepository::new(pool.clone()));
            HttpState::new(
                Arc::new(PasswordAuthService::new(chefs.clone(), hasher)),
                Arc::new(RecipeQueryService::new(recipes.clone())),
                Arc::new(RecipeCommandService::new(recipes, chefs)),
            )
        }
        None => {
            warn!("no database configured; recipes and chefs are held in memory only");
            let chefs = Arc::new(InMemoryChefRepository::new());
            let recipes = Arc::new(InMemoryRecipeRepository::new());
            HttpState::new(
                Arc::new(PasswordAuthService::new(chefs.clone(), hasher)),
                Arc::new(RecipeQueryService::new(recipes.clone())),
                Arc::new(RecipeCommandService::new(recipes, chefs)),
            )
        }
    }
}
