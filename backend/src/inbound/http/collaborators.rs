//! Collaborator API handlers.
//!
//! ```text
//! GET /api/v1/collaborators/{id}/name
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::ports::NameLookup;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Response payload for a collaborator name lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollaboratorNameResponse {
    /// Identifier echoed back from the request path.
    #[schema(example = "col-0001")]
    pub id: String,
    /// Resolved full name; `null` when the directory was unreachable.
    #[schema(example = "Ana Beatriz Souza")]
    pub display_name: Option<String>,
}

/// Resolve the display name for a collaborator identifier.
///
/// A missing record is a 404; a directory fault still answers 200 with a
/// `null` name so the caller can fall back instead of failing its render.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use plantao_backend::inbound::http::collaborators::get_collaborator_name;
///
/// let app = App::new().service(get_collaborator_name);
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/collaborators/{id}/name",
    params(
        ("id" = String, Path, description = "Collaborator identifier in the directory")
    ),
    responses(
        (status = 200, description = "Name resolved, or directory unavailable (null name)", body = CollaboratorNameResponse),
        (status = 404, description = "No record for this identifier", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["collaborators"],
    operation_id = "getCollaboratorName"
)]
#[get("/collaborators/{id}/name")]
pub async fn get_collaborator_name(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CollaboratorNameResponse>> {
    let raw_id = path.into_inner();
    match state.collaborator_names.display_name(&raw_id).await {
        NameLookup::Found(name) => Ok(web::Json(CollaboratorNameResponse {
            id: raw_id,
            display_name: Some(name.into()),
        })),
        NameLookup::NotFound => Err(Error::not_found(format!(
            "collaborator {raw_id} not found"
        ))),
        // The lookup service already logged the fault; answer with an
        // absent name so the dashboard keeps rendering.
        NameLookup::Unavailable(_) => Ok(web::Json(CollaboratorNameResponse {
            id: raw_id,
            display_name: None,
        })),
    }
}
