//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use actix_session::{SessionMiddleware, config::CookieContentSecurity, storage::CookieSessionStore};
use actix_web::cookie::{Key, SameSite};
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::inbound::http::chefs::{login, register};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::recipes::{
    create_recipe, delete_recipe, get_recipe, list_by_category, list_by_name, list_recipes,
    search_recipes, update_recipe,
};
use crate::inbound::http::state::HttpState;
use crate::middleware::Trace;
use state_builders::build_http_state;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    key: Key,
    cookie_secure: bool,
    same_site: SameSite,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        key,
        cookie_secure,
        same_site,
    } = deps;

    let session = SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_name("session".into())
        .cookie_path("/".into())
        .cookie_secure(cookie_secure)
        .cookie_http_only(true)
        .cookie_content_security(CookieContentSecurity::Private)
        .cookie_same_site(same_site)
        .build();

    // Method-specific routes keep the literal segments (`new`, `search/`,
    // `category/...`) from colliding with the `{id}` parameter.
    let api = web::scope("/api")
        .wrap(session)
        .service(register)
        .service(login)
        .service(create_recipe)
        .service(search_recipes)
        .service(list_by_category)
        .service(list_by_name)
        .service(list_recipes)
        .service(get_recipe)
        .service(update_recipe)
        .service(delete_recipe);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app =
        app.service(SwaggerUi::new("/docs/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Build and start the HTTP server described by `config`.
///
/// # Errors
/// Returns [`std::io::Error`] when binding the listener fails.
pub fn run(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = web::Data::new(build_http_state(&config));
    let health_state = web::Data::new(HealthState::new());

    let ServerConfig {
        key,
        cookie_secure,
        same_site,
        bind_addr,
        db_pool: _,
    } = config;

    let deps = AppDependencies {
        health_state: health_state.clone(),
        http_state,
        key,
        cookie_secure,
        same_site,
    };

    let server = HttpServer::new(move || build_app(deps.clone())).bind(bind_addr)?;

    health_state.mark_ready();
    Ok(server.run())
}
