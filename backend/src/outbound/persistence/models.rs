//! Internal Diesel row structs for database operations.
//!
//! Implementation details of the persistence layer; never exposed to the
//! domain. They exist solely to satisfy Diesel's type requirements.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{chefs, recipe_directions, recipe_ingredients, recipes};

/// Row struct for reading from the chefs table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chefs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChefRow {
    pub email: String,
    pub password: String,
}

/// Insertable/upsert struct for chef records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = chefs)]
pub(crate) struct NewChefRow<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Row struct for reading from the recipes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub chef_email: String,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for new recipe records; the id comes from BIGSERIAL.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct NewRecipeRow<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub chef_email: &'a str,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct carrying an explicit id, used by the upsert path.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipes)]
pub(crate) struct RecipeRowWithId<'a> {
    pub id: i64,
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub chef_email: &'a str,
    pub updated_at: DateTime<Utc>,
}

/// Changeset struct for full recipe replacement.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = recipes)]
pub(crate) struct RecipeRowUpdate<'a> {
    pub name: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub chef_email: &'a str,
    pub updated_at: DateTime<Utc>,
}

/// Row struct for reading ingredient elements.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct IngredientRow {
    pub recipe_id: i64,
    #[expect(dead_code, reason = "ordering key consumed by the query's ORDER BY")]
    pub position: i32,
    pub ingredient: String,
}

/// Insertable struct for ingredient elements.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipe_ingredients)]
pub(crate) struct NewIngredientRow<'a> {
    pub recipe_id: i64,
    pub position: i32,
    pub ingredient: &'a str,
}

/// Row struct for reading direction elements.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipe_directions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DirectionRow {
    pub recipe_id: i64,
    #[expect(dead_code, reason = "ordering key consumed by the query's ORDER BY")]
    pub position: i32,
    pub direction: String,
}

/// Insertable struct for direction elements.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recipe_directions)]
pub(crate) struct NewDirectionRow<'a> {
    pub recipe_id: i64,
    pub position: i32,
    pub direction: &'a str,
}
