//! Driving port for registration and login use-cases.
//!
//! Inbound adapters call this port to manage chef credentials without
//! importing the backing infrastructure. Registration and login are two
//! explicit operations; the boundary layer composes them (there is no
//! log-in-as-a-side-effect-of-registration here).

use async_trait::async_trait;

use crate::domain::{ChefEmail, RawPassword};

use super::define_port_error;

define_port_error! {
    /// Failures raised by the auth gateway.
    pub enum AuthError {
        /// A chef with this email is already registered.
        EmailTaken => "a chef with this email is already registered",
        /// Unknown email or wrong password; deliberately indistinguishable.
        InvalidCredentials => "invalid credentials",
        /// The hashing adapter failed.
        Hashing { message: String } => "credential hashing failed: {message}",
        /// The credential store failed.
        Repository { message: String } => "credential store failed: {message}",
    }
}

/// Domain use-case port for the auth gateway.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Hash the password and persist a new chef. Fails with
    /// [`AuthError::EmailTaken`] when the email is already registered.
    async fn register(&self, email: &ChefEmail, password: &RawPassword) -> Result<(), AuthError>;

    /// Verify credentials against the stored hash.
    async fn login(&self, email: &ChefEmail, password: &RawPassword) -> Result<(), AuthError>;
}
