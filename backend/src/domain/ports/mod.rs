//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod authentication_context;
mod collaborator_directory;
mod collaborator_name_query;
mod dashboard_query;

#[cfg(test)]
pub use authentication_context::MockAuthenticationContext;
pub use authentication_context::{
    AuthContextError, AuthenticationContext, FixtureAuthenticationContext,
};
#[cfg(test)]
pub use collaborator_directory::MockCollaboratorDirectory;
pub use collaborator_directory::{
    CollaboratorDirectory, DirectoryError, FIXTURE_COLLABORATOR_ID, FIXTURE_COLLABORATOR_NAME,
    FixtureCollaboratorDirectory,
};
#[cfg(test)]
pub use collaborator_name_query::MockCollaboratorNameQuery;
pub use collaborator_name_query::{CollaboratorNameQuery, NameLookup};
#[cfg(test)]
pub use dashboard_query::MockDashboardQuery;
pub use dashboard_query::{DashboardQuery, FixtureDashboardQuery};
