//! OpenAPI documentation configuration.
//!
//! This module defines the [`ApiDoc`] struct which generates the OpenAPI
//! specification for the REST API. It registers:
//!
//! - **Paths**: the dashboard, collaborator, and health endpoints from the
//!   inbound layer
//! - **Schemas**: the view models and error payload those endpoints
//!   serialise
//!
//! The generated specification backs the Swagger UI served in debug
//! builds.

use utoipa::OpenApi;

use crate::domain::{
    DashboardView, Error, ErrorCode, FooterView, HeaderView, Reminder, RemindersView,
};
use crate::inbound::http::collaborators::CollaboratorNameResponse;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Plantão backend API",
        description = "HTTP interface for the on-duty hospital staff dashboard."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::dashboard::get_dashboard,
        crate::inbound::http::collaborators::get_collaborator_name,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DashboardView,
        HeaderView,
        RemindersView,
        FooterView,
        Reminder,
        CollaboratorNameResponse,
        Error,
        ErrorCode
    )),
    tags(
        (name = "dashboard", description = "Composed dashboard payload"),
        (name = "collaborators", description = "Collaborator directory lookups"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
