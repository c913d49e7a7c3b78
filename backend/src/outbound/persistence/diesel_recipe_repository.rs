//! PostgreSQL-backed `RecipeRepository` implementation using Diesel.
//!
//! Recipes span three tables: the recipe row plus ordered element rows for
//! ingredients and directions. Writes replace the element collections inside
//! the same transaction as the recipe row so readers never observe a
//! half-written recipe.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};

use crate::domain::ports::{RecipePersistenceError, RecipeRepository};
use crate::domain::{ChefEmail, Recipe, RecipeDraft, RecipeId};

use super::diesel_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{
    DirectionRow, IngredientRow, NewDirectionRow, NewIngredientRow, NewRecipeRow, RecipeRow,
    RecipeRowUpdate, RecipeRowWithId,
};
use super::pool::{DbPool, PoolError};
use super::schema::{recipe_directions, recipe_ingredients, recipes};

diesel::define_sql_function! {
    /// SQL `lower`, used for case-insensitive matching.
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

type PooledConn<'a> = diesel_async::pooled_connection::bb8::PooledConnection<'a, AsyncPgConnection>;

/// Diesel-backed implementation of the recipe repository port.
#[derive(Clone)]
pub struct DieselRecipeRepository {
    pool: DbPool,
}

impl DieselRecipeRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> RecipePersistenceError {
    map_basic_pool_error(error, RecipePersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> RecipePersistenceError {
    map_basic_diesel_error(
        error,
        RecipePersistenceError::query,
        RecipePersistenceError::connection,
    )
}

/// Escape LIKE metacharacters so a search fragment matches literally.
fn escape_like(fragment: &str) -> String {
    fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Pair each element with its list position.
fn positioned(items: &[String]) -> Result<Vec<(i32, &str)>, RecipePersistenceError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            i32::try_from(index)
                .map(|position| (position, item.as_str()))
                .map_err(|_| RecipePersistenceError::query("element list too long"))
        })
        .collect()
}

/// Convert loaded rows into a validated domain recipe.
fn row_to_recipe(
    row: RecipeRow,
    ingredients: Vec<String>,
    directions: Vec<String>,
) -> Result<Recipe, RecipePersistenceError> {
    let author = ChefEmail::new(row.chef_email)
        .map_err(|err| RecipePersistenceError::query(format!("invalid stored owner: {err}")))?;
    let content =
        RecipeDraft::new(row.name, row.category, row.description, ingredients, directions)
            .map_err(|err| RecipePersistenceError::query(format!("invalid stored recipe: {err}")))?;
    Ok(Recipe::persisted(
        RecipeId::new(row.id),
        content,
        author,
        row.updated_at,
    ))
}

/// Group element rows by recipe id, preserving their query order.
fn group_elements<R>(
    rows: Vec<R>,
    key: impl Fn(&R) -> i64,
    value: impl Fn(R) -> String,
) -> HashMap<i64, Vec<String>> {
    let mut grouped: HashMap<i64, Vec<String>> = HashMap::new();
    for row in rows {
        grouped.entry(key(&row)).or_default().push(value(row));
    }
    grouped
}

/// Load the element collections for the given recipe rows and assemble
/// validated domain recipes, preserving the row order.
async fn attach_elements(
    conn: &mut PooledConn<'_>,
    rows: Vec<RecipeRow>,
) -> Result<Vec<Recipe>, RecipePersistenceError> {
    let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

    let ingredient_rows: Vec<IngredientRow> = recipe_ingredients::table
        .filter(recipe_ingredients::recipe_id.eq_any(ids.clone()))
        .order((
            recipe_ingredients::recipe_id.asc(),
            recipe_ingredients::position.asc(),
        ))
        .select(IngredientRow::as_select())
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let direction_rows: Vec<DirectionRow> = recipe_directions::table
        .filter(recipe_directions::recipe_id.eq_any(ids))
        .order((
            recipe_directions::recipe_id.asc(),
            recipe_directions::position.asc(),
        ))
        .select(DirectionRow::as_select())
        .load(conn)
        .await
        .map_err(map_diesel_error)?;

    let mut ingredients = group_elements(ingredient_rows, |row| row.recipe_id, |row| row.ingredient);
    let mut directions = group_elements(direction_rows, |row| row.recipe_id, |row| row.direction);

    rows.into_iter()
        .map(|row| {
            let row_ingredients = ingredients.remove(&row.id).unwrap_or_default();
            let row_directions = directions.remove(&row.id).unwrap_or_default();
            row_to_recipe(row, row_ingredients, row_directions)
        })
        .collect()
}

#[async_trait]
impl RecipeRepository for DieselRecipeRepository {
    async fn find_by_id(&self, id: RecipeId) -> Result<Option<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RecipeRow> = recipes::table
            .filter(recipes::id.eq(id.get()))
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        let recipes = attach_elements(&mut conn, rows).await?;
        Ok(recipes.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RecipeRow> = recipes::table
            .order(recipes::id.asc())
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        attach_elements(&mut conn, rows).await
    }

    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RecipeRow> = recipes::table
            .filter(lower(recipes::category).eq(category.to_lowercase()))
            .order((recipes::updated_at.desc(), recipes::id.desc()))
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        attach_elements(&mut conn, rows).await
    }

    async fn find_by_name_contains(
        &self,
        fragment: &str,
    ) -> Result<Vec<Recipe>, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let pattern = format!("%{}%", escape_like(&fragment.to_lowercase()));
        let rows: Vec<RecipeRow> = recipes::table
            .filter(lower(recipes::name).like(pattern))
            .order((recipes::updated_at.desc(), recipes::id.desc()))
            .select(RecipeRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        attach_elements(&mut conn, rows).await
    }

    async fn save(&self, recipe: &Recipe) -> Result<RecipeId, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let ingredients = positioned(recipe.ingredients())?;
        let directions = positioned(recipe.directions())?;

        let id = conn
            .transaction::<i64, diesel::result::Error, _>(|conn| {
                async move {
                    let id = match recipe.id() {
                        None => {
                            let row = NewRecipeRow {
                                name: recipe.name(),
                                category: recipe.category(),
                                description: recipe.description(),
                                chef_email: recipe.author().as_ref(),
                                updated_at: recipe.updated_at(),
                            };
                            diesel::insert_into(recipes::table)
                                .values(&row)
                                .returning(recipes::id)
                                .get_result::<i64>(conn)
                                .await?
                        }
                        Some(existing) => {
                            let row = RecipeRowWithId {
                                id: existing.get(),
                                name: recipe.name(),
                                category: recipe.category(),
                                description: recipe.description(),
                                chef_email: recipe.author().as_ref(),
                                updated_at: recipe.updated_at(),
                            };
                            let update = RecipeRowUpdate {
                                name: recipe.name(),
                                category: recipe.category(),
                                description: recipe.description(),
                                chef_email: recipe.author().as_ref(),
                                updated_at: recipe.updated_at(),
                            };
                            diesel::insert_into(recipes::table)
                                .values(&row)
                                .on_conflict(recipes::id)
                                .do_update()
                                .set(&update)
                                .returning(recipes::id)
                                .get_result::<i64>(conn)
                                .await?
                        }
                    };

                    // Full replace of the element collections.
                    diesel::delete(
                        recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(id)),
                    )
                    .execute(conn)
                    .await?;
                    diesel::delete(
                        recipe_directions::table.filter(recipe_directions::recipe_id.eq(id)),
                    )
                    .execute(conn)
                    .await?;

                    let ingredient_rows: Vec<NewIngredientRow<'_>> = ingredients
                        .iter()
                        .map(|&(position, ingredient)| NewIngredientRow {
                            recipe_id: id,
                            position,
                            ingredient,
                        })
                        .collect();
                    diesel::insert_into(recipe_ingredients::table)
                        .values(&ingredient_rows)
                        .execute(conn)
                        .await?;

                    let direction_rows: Vec<NewDirectionRow<'_>> = directions
                        .iter()
                        .map(|&(position, direction)| NewDirectionRow {
                            recipe_id: id,
                            position,
                            direction,
                        })
                        .collect();
                    diesel::insert_into(recipe_directions::table)
                        .values(&direction_rows)
                        .execute(conn)
                        .await?;

                    Ok(id)
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        Ok(RecipeId::new(id))
    }

    async fn exists_by_id(&self, id: RecipeId) -> Result<bool, RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(diesel::dsl::exists(
            recipes::table.filter(recipes::id.eq(id.get())),
        ))
        .get_result::<bool>(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn delete_by_id(&self, id: RecipeId) -> Result<(), RecipePersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            async move {
                diesel::delete(
                    recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(id.get())),
                )
                .execute(conn)
                .await?;
                diesel::delete(
                    recipe_directions::table.filter(recipe_directions::recipe_id.eq(id.get())),
                )
                .execute(conn)
                .await?;
                diesel::delete(recipes::table.filter(recipes::id.eq(id.get())))
                    .execute(conn)
                    .await?;
                Ok(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }
}
