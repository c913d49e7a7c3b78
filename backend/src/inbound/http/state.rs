//! Shared HTTP adapter state.
//!
//! Handlers accept this via `actix_web::web::Data`, so they depend only on
//! the domain driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{AuthService, RecipeCommand, RecipeQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Auth gateway behind the registration and login endpoints.
    pub auth: Arc<dyn AuthService>,
    /// Read side of the recipe catalog.
    pub queries: Arc<dyn RecipeQuery>,
    /// Write side of the recipe catalog.
    pub commands: Arc<dyn RecipeCommand>,
}

impl HttpState {
    /// Bundle the port implementations handlers need.
    pub fn new(
        auth: Arc<dyn AuthService>,
        queries: Arc<dyn RecipeQuery>,
        commands: Arc<dyn RecipeCommand>,
    ) -> Self {
        Self {
            auth,
            queries,
            commands,
        }
    }
}
