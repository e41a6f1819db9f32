//! Dashboard API handler.
//!
//! ```text
//! GET /api/v1/dashboard
//! ```

use actix_web::{get, web};

use crate::domain::{DashboardView, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Render the full dashboard for the staff member on duty.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use plantao_backend::inbound::http::dashboard::get_dashboard;
///
/// let app = App::new().service(get_dashboard);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    responses(
        (status = 200, description = "Dashboard payload", body = DashboardView),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["dashboard"],
    operation_id = "getDashboard"
)]
#[get("/dashboard")]
pub async fn get_dashboard(state: web::Data<HttpState>) -> ApiResult<web::Json<DashboardView>> {
    let view = state.dashboard.dashboard().await?;
    Ok(web::Json(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CollaboratorNameService;
    use crate::domain::ports::{FixtureCollaboratorDirectory, FixtureDashboardQuery};
    use actix_web::{App, test as actix_test};
    use serde_json::Value;
    use std::sync::Arc;

    fn fixture_state() -> HttpState {
        HttpState {
            dashboard: Arc::new(FixtureDashboardQuery),
            collaborator_names: Arc::new(CollaboratorNameService::new(Arc::new(
                FixtureCollaboratorDirectory,
            ))),
        }
    }

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").service(get_dashboard))
    }

    #[actix_web::test]
    async fn dashboard_returns_camel_case_view() {
        let app = actix_test::init_service(test_app(fixture_state())).await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/dashboard")
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        assert!(response.status().is_success());

        let body = actix_test::read_body(response).await;
        let value: Value = serde_json::from_slice(&body).expect("response JSON");

        let header = value.get("header").expect("header present");
        assert_eq!(
            header.get("greeting").and_then(Value::as_str),
            Some("Bem-vindo(a), Dr(a). Médico!")
        );
        assert_eq!(
            header.get("currentDate").and_then(Value::as_str),
            Some("segunda-feira, 10 de março de 2025")
        );

        let reminders = value.get("reminders").expect("reminders present");
        assert_eq!(
            reminders.get("title").and_then(Value::as_str),
            Some("Lembretes")
        );
        assert_eq!(
            reminders.get("items").and_then(Value::as_array).map(Vec::len),
            Some(0)
        );

        let footer = value.get("footer").expect("footer present");
        assert_eq!(
            footer.get("name").and_then(Value::as_str),
            Some("Hospital São Lucas")
        );
        assert!(footer.get("postalCode").is_some());
        assert!(footer.get("postal_code").is_none());
    }
}
