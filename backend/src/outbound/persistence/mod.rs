//! PostgreSQL persistence adapters behind the domain repository ports.

mod diesel_chef_repository;
mod diesel_error_mapping;
mod diesel_recipe_repository;
mod models;
pub mod pool;
pub mod schema;

pub use diesel_chef_repository::DieselChefRepository;
pub use diesel_recipe_repository::DieselRecipeRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
