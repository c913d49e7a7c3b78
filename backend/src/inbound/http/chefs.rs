//! Chef account HTTP handlers.
//!
//! ```text
//! POST /api/register {"email":"chef@example.com","password":"secret-123"}
//! POST /api/login    {"email":"chef@example.com","password":"secret-123"}
//! ```
//!
//! Registration and login are two explicit operations; this boundary layer
//! composes them. Registering an already-known email responds 400, but when
//! the submitted credentials verify, the existing chef is logged in anyway,
//! matching the catalog's historical registration contract.

use actix_web::{HttpResponse, ResponseError, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::ports::AuthError;
use crate::domain::{ChefEmail, ChefValidationError, Error, RawPassword};
use crate::inbound::http::ApiResult;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Request body for registration and login.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CredentialsBody {
    /// Chef email address; primary identity.
    #[schema(example = "chef@example.com")]
    pub email: String,
    /// Raw password, at least 8 characters.
    #[schema(example = "correct-horse")]
    pub password: String,
}

fn map_validation_error(err: ChefValidationError) -> Error {
    let (field, code) = match err {
        ChefValidationError::EmptyEmail => ("email", "empty_email"),
        ChefValidationError::InvalidEmail => ("email", "invalid_email"),
        ChefValidationError::PasswordTooShort { .. } => ("password", "password_too_short"),
    };
    Error::invalid_request(err.to_string())
        .with_details(json!({ "field": field, "code": code }))
}

fn map_auth_error(err: AuthError) -> Error {
    match err {
        AuthError::EmailTaken => Error::invalid_request(err.to_string())
            .with_details(json!({ "field": "email", "code": "email_taken" })),
        AuthError::InvalidCredentials => Error::unauthorized(err.to_string()),
        AuthError::Hashing { .. } | AuthError::Repository { .. } => {
            Error::internal(err.to_string())
        }
    }
}

fn parse_credentials(body: CredentialsBody) -> Result<(ChefEmail, RawPassword), Error> {
    let email = ChefEmail::new(&body.email).map_err(map_validation_error)?;
    let password = RawPassword::new(body.password).map_err(map_validation_error)?;
    Ok((email, password))
}

/// Register a new chef and establish a session.
///
/// A duplicate email never creates a second record: the response is 400, and
/// when the submitted password matches the existing account the chef is
/// logged in regardless.
#[utoipa::path(
    post,
    path = "/api/register",
    request_body = CredentialsBody,
    responses(
        (status = 200, description = "Registered; session established",
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Validation failure or email already registered", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["chefs"],
    operation_id = "register"
)]
#[post("/register")]
pub async fn register(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsBody>,
) -> ApiResult<HttpResponse> {
    let (email, password) = parse_credentials(payload.into_inner())?;

    match state.auth.register(&email, &password).await {
        Ok(()) => {
            // Explicit composition: the freshly registered chef logs in with
            // the same credentials before the session is established.
            state
                .auth
                .login(&email, &password)
                .await
                .map_err(map_auth_error)?;
            session.persist_chef(&email)?;
            Ok(HttpResponse::Ok().finish())
        }
        Err(AuthError::EmailTaken) => {
            if state.auth.login(&email, &password).await.is_ok() {
                session.persist_chef(&email)?;
            }
            // Built as a response rather than returned as Err so the session
            // middleware still attaches the cookie for the logged-in chef.
            Ok(map_auth_error(AuthError::email_taken()).error_response())
        }
        Err(other) => Err(map_auth_error(other)),
    }
}

/// Authenticate a chef and establish a session.
#[utoipa::path(
    post,
    path = "/api/login",
    request_body = CredentialsBody,
    responses(
        (status = 200, description = "Login success",
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Validation failure", body = Error),
        (status = 401, description = "Invalid credentials", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["chefs"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    session: SessionContext,
    state: web::Data<HttpState>,
    payload: web::Json<CredentialsBody>,
) -> ApiResult<HttpResponse> {
    let (email, password) = parse_credentials(payload.into_inner())?;
    state
        .auth
        .login(&email, &password)
        .await
        .map_err(map_auth_error)?;
    session.persist_chef(&email)?;
    Ok(HttpResponse::Ok().finish())
}
