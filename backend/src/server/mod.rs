//! Server construction and wiring.

mod config;

pub use config::{ServerConfig, ServerConfigError, bind_addr_from_env};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::ports::{
    CollaboratorNameQuery, FixtureAuthenticationContext, FixtureCollaboratorDirectory,
};
use crate::domain::{CollaboratorNameService, DashboardService};
use crate::inbound::http::collaborators::get_collaborator_name;
use crate::inbound::http::dashboard::get_dashboard;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::outbound::directory::HttpCollaboratorDirectory;

/// Build the collaborator name lookup service for the configured
/// directory, falling back to the fixture when none is configured.
fn build_collaborator_names(
    config: &ServerConfig,
) -> std::io::Result<Arc<dyn CollaboratorNameQuery>> {
    match &config.directory {
        Some(directory) => {
            let adapter = HttpCollaboratorDirectory::new(directory).map_err(|e| {
                std::io::Error::other(format!("directory adapter construction failed: {e}"))
            })?;
            Ok(Arc::new(CollaboratorNameService::new(Arc::new(adapter))))
        }
        None => Ok(Arc::new(CollaboratorNameService::new(Arc::new(
            FixtureCollaboratorDirectory,
        )))),
    }
}

fn build_http_state(config: &ServerConfig) -> std::io::Result<web::Data<HttpState>> {
    let collaborator_names = build_collaborator_names(config)?;
    // Authentication stays with the hosting shell; the fixture context
    // renders the fallback greeting until an identity adapter is wired.
    let dashboard = Arc::new(DashboardService::new(
        Arc::new(FixtureAuthenticationContext),
        Arc::new(DefaultClock),
    ));
    Ok(web::Data::new(HttpState {
        dashboard,
        collaborator_names,
    }))
}

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
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
    } = deps;

    let api = web::scope("/api/v1")
        .service(get_dashboard)
        .service(get_collaborator_name);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state the caller flips once the
///   listener is live.
/// - `config`: pre-built [`ServerConfig`] with binding and directory settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the directory adapter cannot be
/// built or binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let http_state = build_http_state(&config)?;
    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(config.bind_addr)?
    .run();

    Ok(server)
}
