//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{CollaboratorNameQuery, DashboardQuery};

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use plantao_backend::domain::CollaboratorNameService;
/// use plantao_backend::domain::ports::{FixtureCollaboratorDirectory, FixtureDashboardQuery};
/// use plantao_backend::inbound::http::state::HttpState;
///
/// let state = HttpState {
///     dashboard: Arc::new(FixtureDashboardQuery),
///     collaborator_names: Arc::new(CollaboratorNameService::new(Arc::new(
///         FixtureCollaboratorDirectory,
///     ))),
/// };
/// let _dashboard = state.dashboard.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Dashboard composition port.
    pub dashboard: Arc<dyn DashboardQuery>,
    /// Collaborator name lookup port.
    pub collaborator_names: Arc<dyn CollaboratorNameQuery>,
}
