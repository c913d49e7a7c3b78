//! OpenAPI document assembled from handler annotations.

use utoipa::OpenApi;

/// Public OpenAPI surface used by Swagger UI and tooling.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::inbound::http::recipes::get_recipe,
        crate::inbound::http::recipes::list_recipes,
        crate::inbound::http::recipes::list_by_category,
        crate::inbound::http::recipes::list_by_name,
        crate::inbound::http::recipes::search_recipes,
        crate::inbound::http::recipes::create_recipe,
        crate::inbound::http::recipes::update_recipe,
        crate::inbound::http::recipes::delete_recipe,
        crate::inbound::http::chefs::register,
        crate::inbound::http::chefs::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        crate::inbound::http::recipes::RecipeBody,
        crate::inbound::http::recipes::RecipeResponse,
        crate::inbound::http::recipes::RecipeIdResponse,
        crate::inbound::http::chefs::CredentialsBody,
        crate::domain::Error,
        crate::domain::ErrorCode,
    )),
    tags(
        (name = "recipes", description = "Recipe catalog operations"),
        (name = "chefs", description = "Registration and login"),
        (name = "health", description = "Orchestration probes"),
    )
)]
pub struct ApiDoc;
