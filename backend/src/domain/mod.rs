//! Domain entities, errors, ports, and the services behind the driving ports.
//!
//! Everything in this module is transport and persistence agnostic: entities
//! validate their own invariants, ports describe the capabilities the domain
//! needs, and the service implementations mediate between them.

pub mod auth_service;
pub mod catalogue_service;
pub mod chef;
pub mod error;
pub mod ports;
pub mod recipe;

pub use self::auth_service::PasswordAuthService;
pub use self::catalogue_service::{RecipeCommandService, RecipeQueryService};
pub use self::chef::{
    Chef, ChefEmail, ChefValidationError, PASSWORD_MIN, PasswordHash, RawPassword,
};
pub use self::error::{Error, ErrorCode, TRACE_ID_HEADER};
pub use self::recipe::{Recipe, RecipeDraft, RecipeId, RecipeValidationError};
