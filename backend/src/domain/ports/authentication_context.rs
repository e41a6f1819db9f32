//! Driven port for the ambient authentication context.
//!
//! Session management lives in the hosting shell, not here. The dashboard
//! only asks "who, if anyone, is signed in right now" and renders a
//! generic greeting when the answer is nobody.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::staff::StaffProfile;

define_port_error! {
    /// Errors surfaced while reading the authentication context.
    pub enum AuthContextError {
        /// The context provider could not be reached.
        Unavailable { message: String } =>
            "authentication context unavailable: {message}",
    }
}

/// Port for reading the signed-in staff profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthenticationContext: Send + Sync {
    /// Profile of the staff member currently signed in, if any.
    async fn current_profile(&self) -> Result<Option<StaffProfile>, AuthContextError>;
}

/// Fixture context with nobody signed in.
///
/// Keeps the dashboard rendering with its fallback greeting until a real
/// identity provider is wired.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureAuthenticationContext;

#[async_trait]
impl AuthenticationContext for FixtureAuthenticationContext {
    async fn current_profile(&self) -> Result<Option<StaffProfile>, AuthContextError> {
        Ok(None)
    }
}
