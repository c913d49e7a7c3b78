//! Recipe catalog HTTP handlers.
//!
//! ```text
//! GET    /api/recipe/{id}
//! GET    /api/recipe/
//! GET    /api/recipe/category/{category}
//! GET    /api/recipe/name/{name}
//! GET    /api/recipe/search/?category=|&name=
//! POST   /api/recipe/new
//! PUT    /api/recipe/{id}
//! DELETE /api/recipe/{id}
//! ```
//!
//! Reads are public; mutations require an authenticated session. Recipe JSON
//! output never exposes the numeric id or the owning chef; mutation
//! responses return the id wrapped in a small `{"id": n}` object.

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, Recipe, RecipeDraft, RecipeId, RecipeValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request body for creating or replacing a recipe.
///
/// Unknown fields (including any client-supplied `id` or `date`) are ignored;
/// the identifier and timestamp are always server-assigned.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct RecipeBody {
    #[schema(example = "Fresh Mint Tea")]
    pub name: String,
    #[schema(example = "beverage")]
    pub category: String,
    #[schema(example = "Light, aromatic and refreshing")]
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
}

/// Recipe representation returned to clients; id and owner are suppressed.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub name: String,
    pub category: String,
    #[schema(format = "date-time")]
    pub date: DateTime<Utc>,
    pub description: String,
    pub ingredients: Vec<String>,
    pub directions: Vec<String>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            name: recipe.name().to_owned(),
            category: recipe.category().to_owned(),
            date: recipe.updated_at(),
            description: recipe.description().to_owned(),
            ingredients: recipe.ingredients().to_vec(),
            directions: recipe.directions().to_vec(),
        }
    }
}

/// Mutation response carrying the affected recipe id.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeIdResponse {
    pub id: i64,
}

/// Query parameters for `GET /api/recipe/search/`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub category: Option<String>,
    pub name: Option<String>,
}

fn map_validation_error(err: RecipeValidationError) -> Error {
    let (field, code) = match err {
        RecipeValidationError::BlankName => ("name", "blank_name"),
        RecipeValidationError::BlankCategory => ("category", "blank_category"),
        RecipeValidationError::BlankDescription => ("description", "blank_description"),
        RecipeValidationError::MissingIngredients => ("ingredients", "missing_ingredients"),
        RecipeValidationError::MissingDirections => ("directions", "missing_directions"),
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": field, "code": code }))
}

fn parse_draft(body: RecipeBody) -> Result<RecipeDraft, Error> {
    RecipeDraft::new(
        body.name,
        body.category,
        body.description,
        body.ingredients,
        body.directions,
    )
    .map_err(map_validation_error)
}

fn to_responses(recipes: Vec<Recipe>) -> Vec<RecipeResponse> {
    recipes.into_iter().map(RecipeResponse::from).collect()
}

/// Fetch a single recipe by id.
#[utoipa::path(
    get,
    path = "/api/recipe/{id}",
    params(("id" = i64, Path, description = "Recipe identifier")),
    responses(
        (status = 200, description = "Recipe", body = RecipeResponse),
        (status = 404, description = "No recipe with this id", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "getRecipe"
)]
#[get("/recipe/{id}")]
pub async fn get_recipe(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<RecipeResponse>> {
    let recipe = state.queries.get(RecipeId::new(path.into_inner())).await?;
    Ok(web::Json(recipe.into()))
}

/// List every recipe, in insertion order.
#[utoipa::path(
    get,
    path = "/api/recipe/",
    responses(
        (status = 200, description = "All recipes (possibly empty)", body = [RecipeResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "listRecipes"
)]
#[get("/recipe/")]
pub async fn list_recipes(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let recipes = state.queries.list_all().await?;
    Ok(web::Json(to_responses(recipes)))
}

/// List recipes in a category (case-insensitive exact match), newest first.
#[utoipa::path(
    get,
    path = "/api/recipe/category/{category}",
    params(("category" = String, Path, description = "Category, matched ignoring case")),
    responses(
        (status = 200, description = "Matching recipes, newest first", body = [RecipeResponse])
    ),
    tags = ["recipes"],
    operation_id = "listRecipesByCategory"
)]
#[get("/recipe/category/{category}")]
pub async fn list_by_category(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let recipes = state.queries.list_by_category(&path.into_inner()).await?;
    Ok(web::Json(to_responses(recipes)))
}

/// List recipes whose name contains the fragment (ignoring case), newest
/// first.
#[utoipa::path(
    get,
    path = "/api/recipe/name/{name}",
    params(("name" = String, Path, description = "Name fragment, matched ignoring case")),
    responses(
        (status = 200, description = "Matching recipes, newest first", body = [RecipeResponse])
    ),
    tags = ["recipes"],
    operation_id = "listRecipesByName"
)]
#[get("/recipe/name/{name}")]
pub async fn list_by_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let recipes = state.queries.list_by_name(&path.into_inner()).await?;
    Ok(web::Json(to_responses(recipes)))
}

/// Search by category or by name fragment; exactly one must be provided.
#[utoipa::path(
    get,
    path = "/api/recipe/search/",
    params(
        ("category" = Option<String>, Query, description = "Category, matched ignoring case"),
        ("name" = Option<String>, Query, description = "Name fragment, matched ignoring case")
    ),
    responses(
        (status = 200, description = "Matching recipes, newest first", body = [RecipeResponse]),
        (status = 400, description = "Both or neither parameter provided", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "searchRecipes"
)]
#[get("/recipe/search/")]
pub async fn search_recipes(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<RecipeResponse>>> {
    let SearchParams { category, name } = params.into_inner();
    let recipes = match (category.as_deref(), name.as_deref()) {
        (Some(_), Some(_)) | (None, None) => {
            return Err(Error::invalid_request(
                "exactly one of 'category' or 'name' must be provided",
            ));
        }
        (Some(category), None) => state.queries.list_by_category(category).await?,
        (None, Some(name)) => state.queries.list_by_name(name).await?,
    };
    Ok(web::Json(to_responses(recipes)))
}

/// Create a recipe owned by the authenticated chef.
#[utoipa::path(
    post,
    path = "/api/recipe/new",
    request_body = RecipeBody,
    responses(
        (status = 200, description = "Created", body = RecipeIdResponse),
        (status = 400, description = "Validation failure", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "Caller has no chef record", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "createRecipe"
)]
#[post("/recipe/new")]
pub async fn create_recipe(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<RecipeBody>,
) -> ApiResult<web::Json<RecipeIdResponse>> {
    let author = session.require_chef()?;
    let draft = parse_draft(payload.into_inner())?;
    let id = state.commands.create(&author, draft).await?;
    Ok(web::Json(RecipeIdResponse { id: id.get() }))
}

/// Fully replace a recipe; only its owner may do so.
#[utoipa::path(
    put,
    path = "/api/recipe/{id}",
    params(("id" = i64, Path, description = "Recipe identifier")),
    request_body = RecipeBody,
    responses(
        (status = 204, description = "Replaced", body = RecipeIdResponse),
        (status = 400, description = "Validation failure", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 403, description = "Caller is not the owner", body = Error),
        (status = 404, description = "No recipe with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "updateRecipe"
)]
#[put("/recipe/{id}")]
pub async fn update_recipe(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<RecipeBody>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_chef()?;
    let draft = parse_draft(payload.into_inner())?;
    let id = state
        .commands
        .update(&caller, RecipeId::new(path.into_inner()), draft)
        .await?;
    Ok(HttpResponse::NoContent().json(RecipeIdResponse { id: id.get() }))
}

/// Delete a recipe; only its owner may do so.
#[utoipa::path(
    delete,
    path = "/api/recipe/{id}",
    params(("id" = i64, Path, description = "Recipe identifier")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 401, description = "Login required", body = Error),
        (status = 403, description = "Caller is not the owner", body = Error),
        (status = 404, description = "No recipe with this id", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["recipes"],
    operation_id = "deleteRecipe"
)]
#[delete("/recipe/{id}")]
pub async fn delete_recipe(
    session: SessionContext,
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let caller = session.require_chef()?;
    state
        .commands
        .delete(&caller, RecipeId::new(path.into_inner()))
        .await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    //! Endpoint-level coverage against the in-memory adapters.
    use std::sync::Arc;

    use actix_web::cookie::Cookie;
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{
        FixturePasswordHasher, InMemoryChefRepository, InMemoryRecipeRepository,
    };
    use crate::domain::{
        ChefEmail, PasswordAuthService, RecipeCommandService, RecipeQueryService,
    };
    use crate::inbound::http::chefs::{CredentialsBody, register};

    fn test_state() -> web::Data<HttpState> {
        let chefs = Arc::new(InMemoryChefRepository::new());
        let recipes = Arc::new(InMemoryRecipeRepository::new());
        let hasher = Arc::new(FixturePasswordHasher);
        web::Data::new(HttpState::new(
            Arc::new(PasswordAuthService::new(chefs.clone(), hasher)),
            Arc::new(RecipeQueryService::new(recipes.clone())),
            Arc::new(RecipeCommandService::new(recipes, chefs)),
        ))
    }

    fn test_app(
        state: web::Data<HttpState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(crate::inbound::http::test_utils::test_session_middleware())
            .service(
                web::scope("/api")
                    .service(register)
                    .service(create_recipe)
                    .service(search_recipes)
                    .service(list_by_category)
                    .service(list_by_name)
                    .service(list_recipes)
                    .service(get_recipe)
                    .service(update_recipe)
                    .service(delete_recipe)
                    // Test-only escape hatch: establish a session for an
                    // email without registering a chef record.
                    .route(
                        "/test/impersonate/{email}",
                        web::post().to(
                            |session: SessionContext, path: web::Path<String>| async move {
                                let email = ChefEmail::new(path.into_inner())
                                    .expect("valid test email");
                                session.persist_chef(&email)?;
                                Ok::<_, Error>(actix_web::HttpResponse::Ok().finish())
                            },
                        ),
                    ),
            )
    }

    async fn register_chef(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        email: &str,
    ) -> Cookie<'static> {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/register")
                .set_json(CredentialsBody {
                    email: email.into(),
                    password: "secret-password".into(),
                })
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        res.response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned()
    }

    fn recipe_json(name: &str, category: &str) -> Value {
        json!({
            "name": name,
            "category": category,
            "description": "A description.",
            "ingredients": ["water", "salt"],
            "directions": ["mix", "serve"],
        })
    }

    async fn create(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        cookie: &Cookie<'static>,
        body: Value,
    ) -> i64 {
        let res = actix_test::call_service(
            app,
            actix_test::TestRequest::post()
                .uri("/api/recipe/new")
                .cookie(cookie.clone())
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        let value: Value = serde_json::from_slice(&body).expect("id payload");
        value["id"].as_i64().expect("numeric id")
    }

    #[actix_web::test]
    async fn create_then_fetch_round_trips_without_exposing_id_or_owner() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        let id = create(&app, &cookie, recipe_json("Tomato Soup", "Soup")).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/recipe/{id}"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        let value: Value = serde_json::from_slice(&body).expect("recipe payload");
        assert_eq!(value["name"], "Tomato Soup");
        assert_eq!(value["category"], "Soup");
        assert_eq!(value["description"], "A description.");
        assert_eq!(value["ingredients"], json!(["water", "salt"]));
        assert_eq!(value["directions"], json!(["mix", "serve"]));
        assert!(value.get("date").is_some());
        assert!(value.get("id").is_none());
        assert!(value.get("chef").is_none());
    }

    #[actix_web::test]
    async fn fetch_missing_recipe_is_not_found() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/4242")
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn list_all_returns_empty_list_when_no_recipes() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/recipe/").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = actix_test::read_body(res).await;
        let value: Value = serde_json::from_slice(&body).expect("list payload");
        assert_eq!(value, json!([]));
    }

    #[actix_web::test]
    async fn create_ignores_client_supplied_id_and_date() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        let mut body = recipe_json("Sneaky", "Trick");
        body["id"] = json!(999_999);
        body["date"] = json!("2000-01-01T00:00:00Z");
        let id = create(&app, &cookie, body).await;
        assert_ne!(id, 999_999);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/recipe/{id}"))
                .to_request(),
        )
        .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("payload");
        assert_ne!(value["date"], "2000-01-01T00:00:00Z");
    }

    #[actix_web::test]
    async fn unauthenticated_mutations_are_rejected() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let create_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/recipe/new")
                .set_json(recipe_json("x", "y"))
                .to_request(),
        )
        .await;
        assert_eq!(create_res.status(), StatusCode::UNAUTHORIZED);

        let put_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri("/api/recipe/1")
                .set_json(recipe_json("x", "y"))
                .to_request(),
        )
        .await;
        assert_eq!(put_res.status(), StatusCode::UNAUTHORIZED);

        let delete_res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri("/api/recipe/1")
                .to_request(),
        )
        .await;
        assert_eq!(delete_res.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_without_a_chef_record_is_not_found() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/test/impersonate/ghost@example.com")
                .to_request(),
        )
        .await;
        let cookie = res
            .response()
            .cookies()
            .find(|c| c.name() == "session")
            .expect("session cookie")
            .into_owned();

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/recipe/new")
                .cookie(cookie)
                .set_json(recipe_json("Orphan", "None"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn invalid_payloads_are_rejected_before_any_store_mutation() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        let mut body = recipe_json("", "Soup");
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/recipe/new")
                .cookie(cookie.clone())
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        body = recipe_json("Soupless", "Soup");
        body["ingredients"] = json!([]);
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/recipe/new")
                .cookie(cookie)
                .set_json(body)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);

        // Nothing was persisted.
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/recipe/").to_request(),
        )
        .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("payload");
        assert_eq!(value, json!([]));
    }

    #[actix_web::test]
    async fn update_replaces_content_and_returns_the_id() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        let id = create(&app, &cookie, recipe_json("Original", "Soup")).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/recipe/{id}"))
                .cookie(cookie)
                .set_json(recipe_json("Replaced", "Stew"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/recipe/{id}"))
                .to_request(),
        )
        .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("payload");
        assert_eq!(value["name"], "Replaced");
        assert_eq!(value["category"], "Stew");
    }

    #[actix_web::test]
    async fn only_the_owner_may_update_or_delete() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let owner = register_chef(&app, "owner@example.com").await;
        let intruder = register_chef(&app, "intruder@example.com").await;
        let id = create(&app, &owner, recipe_json("Guarded", "Soup")).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/recipe/{id}"))
                .cookie(intruder.clone())
                .set_json(recipe_json("Hijacked", "Soup"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/recipe/{id}"))
                .cookie(intruder)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn owner_preservation_survives_an_update() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let owner = register_chef(&app, "owner@example.com").await;
        let intruder = register_chef(&app, "intruder@example.com").await;
        let id = create(&app, &owner, recipe_json("Original", "Soup")).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::put()
                .uri(&format!("/api/recipe/{id}"))
                .cookie(owner)
                .set_json(recipe_json("Replaced", "Soup"))
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::NO_CONTENT);

        // Still owned by the original chef after the replace.
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/recipe/{id}"))
                .cookie(intruder)
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn delete_is_idempotent_checked() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        let id = create(&app, &cookie, recipe_json("Doomed", "Soup")).await;

        let first = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/recipe/{id}"))
                .cookie(cookie.clone())
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = actix_test::call_service(
            &app,
            actix_test::TestRequest::delete()
                .uri(&format!("/api/recipe/{id}"))
                .cookie(cookie)
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn category_and_name_lookups_ignore_case() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        create(&app, &cookie, recipe_json("Casserole", "Dinner")).await;
        create(&app, &cookie, recipe_json("Tomato Soup", "Soup")).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/category/soup")
                .to_request(),
        )
        .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("payload");
        assert_eq!(value.as_array().expect("array").len(), 1);
        assert_eq!(value[0]["name"], "Tomato Soup");

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/name/cas")
                .to_request(),
        )
        .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("payload");
        assert_eq!(value.as_array().expect("array").len(), 1);
        assert_eq!(value[0]["name"], "Casserole");
    }

    #[actix_web::test]
    async fn category_listing_is_newest_first() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        create(&app, &cookie, recipe_json("First", "Soup")).await;
        create(&app, &cookie, recipe_json("Second", "Soup")).await;

        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/category/Soup")
                .to_request(),
        )
        .await;
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(res).await).expect("payload");
        let names: Vec<_> = value
            .as_array()
            .expect("array")
            .iter()
            .map(|r| r["name"].as_str().expect("name"))
            .collect();
        assert_eq!(names, ["Second", "First"]);
    }

    #[actix_web::test]
    async fn search_requires_exactly_one_parameter() {
        let app = actix_test::init_service(test_app(test_state())).await;
        let cookie = register_chef(&app, "chef@example.com").await;
        create(&app, &cookie, recipe_json("Tomato Soup", "Soup")).await;

        let both = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/search/?category=Soup&name=Tomato")
                .to_request(),
        )
        .await;
        assert_eq!(both.status(), StatusCode::BAD_REQUEST);

        let neither = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/search/")
                .to_request(),
        )
        .await;
        assert_eq!(neither.status(), StatusCode::BAD_REQUEST);

        let by_category = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/search/?category=soup")
                .to_request(),
        )
        .await;
        assert_eq!(by_category.status(), StatusCode::OK);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(by_category).await).expect("payload");
        assert_eq!(value.as_array().expect("array").len(), 1);

        let by_name = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/recipe/search/?name=tomato")
                .to_request(),
        )
        .await;
        assert_eq!(by_name.status(), StatusCode::OK);
        let value: Value =
            serde_json::from_slice(&actix_test::read_body(by_name).await).expect("payload");
        assert_eq!(value.as_array().expect("array").len(), 1);
    }
}
