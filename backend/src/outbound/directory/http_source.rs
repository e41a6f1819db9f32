//! Reqwest-backed collaborator directory adapter.
//!
//! This adapter owns transport details only: query-string construction,
//! authentication headers, timeout and HTTP error mapping, and JSON
//! decoding into domain names. The hosted store speaks PostgREST
//! conventions: rows are filtered with `column=eq.value` parameters, and
//! asking for a single object makes the store answer 406 when no row
//! (or more than one) matches.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url, header};

use super::config::DirectoryConfig;
use super::dto::CollaboratorRowDto;
use super::schema;
use crate::domain::collaborator::{CollaboratorId, FullName};
use crate::domain::ports::{CollaboratorDirectory, DirectoryError};

/// Default end-to-end timeout for directory queries.
pub const DEFAULT_DIRECTORY_TIMEOUT: Duration = Duration::from_secs(10);

/// Accept header asking the store for exactly one JSON object.
const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

/// Errors raised while building the adapter.
#[derive(thiserror::Error, Debug)]
pub enum DirectoryBuildError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build directory HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The table endpoint could not be derived from the base URL.
    #[error("failed to derive directory endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
}

/// Directory adapter performing keyed GET lookups against one endpoint.
pub struct HttpCollaboratorDirectory {
    client: Client,
    endpoint: Url,
    api_key: Option<String>,
}

impl HttpCollaboratorDirectory {
    /// Build an adapter with the default query timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or
    /// the configured base URL cannot carry the REST path.
    pub fn new(config: &DirectoryConfig) -> Result<Self, DirectoryBuildError> {
        Self::with_timeout(config, DEFAULT_DIRECTORY_TIMEOUT)
    }

    /// Build an adapter with an explicit end-to-end timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed or
    /// the configured base URL cannot carry the REST path.
    pub fn with_timeout(
        config: &DirectoryConfig,
        timeout: Duration,
    ) -> Result<Self, DirectoryBuildError> {
        let client = Client::builder().timeout(timeout).build()?;
        let endpoint = table_endpoint(&config.base_url, schema::COLLABORATORS_TABLE)?;
        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl CollaboratorDirectory for HttpCollaboratorDirectory {
    async fn find_full_name(
        &self,
        id: &CollaboratorId,
    ) -> Result<Option<FullName>, DirectoryError> {
        let filter = format!("eq.{}", id.as_ref());
        let mut request = self
            .client
            .get(self.endpoint.clone())
            .header(header::ACCEPT, SINGLE_OBJECT_ACCEPT)
            .query(&[
                ("select", schema::NAME_COLUMN),
                (schema::ID_COLUMN, filter.as_str()),
                ("limit", "1"),
            ]);
        if let Some(key) = &self.api_key {
            request = request
                .header("apikey", key.as_str())
                .header(header::AUTHORIZATION, format!("Bearer {key}"));
        }

        let response = request.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        // In single-object mode the store answers 406 both for zero rows
        // and for ambiguous matches; a keyed lookup treats either as a
        // clean miss.
        if status == StatusCode::NOT_ACCEPTABLE {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        decode_row(body.as_ref()).map(Some)
    }
}

// `Url::join` treats the last path segment as a file unless the base ends
// with a slash, so normalise before joining.
fn table_endpoint(base: &Url, table: &str) -> Result<Url, url::ParseError> {
    let mut normalised = base.clone();
    if !normalised.path().ends_with('/') {
        normalised.set_path(&format!("{}/", normalised.path()));
    }
    normalised.join(&format!("rest/v1/{table}"))
}

fn decode_row(body: &[u8]) -> Result<FullName, DirectoryError> {
    let decoded: CollaboratorRowDto = serde_json::from_slice(body).map_err(|error| {
        DirectoryError::decode(format!("invalid directory row payload: {error}"))
    })?;
    Ok(decoded.into_full_name())
}

fn map_transport_error(error: reqwest::Error) -> DirectoryError {
    if error.is_timeout() {
        DirectoryError::timeout(error.to_string())
    } else {
        DirectoryError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> DirectoryError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => DirectoryError::rate_limited(message),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            DirectoryError::timeout(message)
        }
        _ if status.is_client_error() => DirectoryError::invalid_request(message),
        _ => DirectoryError::transport(message),
    }
}

// Error bodies can be arbitrarily large; keep only enough to diagnose.
fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
