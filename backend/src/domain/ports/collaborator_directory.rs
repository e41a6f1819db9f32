//! Driven port for the hosted collaborator directory.
//!
//! The domain owns the lookup contract so the name service stays
//! adapter-agnostic: one identifier in, at most one full name out.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::collaborator::{CollaboratorId, FullName};

define_port_error! {
    /// Errors surfaced while querying the directory.
    pub enum DirectoryError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "directory transport failed: {message}",
        /// The query exceeded the client timeout.
        Timeout { message: String } =>
            "directory query timed out: {message}",
        /// The directory rate-limited the request.
        RateLimited { message: String } =>
            "directory rate limited the request: {message}",
        /// The response payload could not be decoded.
        Decode { message: String } =>
            "directory response decode failed: {message}",
        /// The directory rejected the query before executing it.
        InvalidRequest { message: String } =>
            "directory rejected the query: {message}",
    }
}

impl DirectoryError {
    /// Return whether retrying this error is expected to help.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }
}

/// Port for fetching a collaborator's full name from the directory.
///
/// `Ok(None)` means the directory answered and holds no matching record;
/// errors are reserved for the query itself failing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollaboratorDirectory: Send + Sync {
    /// Fetch the full name recorded for `id`, if any.
    async fn find_full_name(
        &self,
        id: &CollaboratorId,
    ) -> Result<Option<FullName>, DirectoryError>;
}

/// Identifier the fixture directory recognises.
pub const FIXTURE_COLLABORATOR_ID: &str = "col-0001";

/// Full name the fixture directory returns for the known identifier.
pub const FIXTURE_COLLABORATOR_NAME: &str = "Ana Beatriz Souza";

/// Fixture directory holding a single canned record.
///
/// Serves local development and tests while no hosted directory is
/// configured: the known identifier resolves, everything else misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureCollaboratorDirectory;

#[async_trait]
impl CollaboratorDirectory for FixtureCollaboratorDirectory {
    async fn find_full_name(
        &self,
        id: &CollaboratorId,
    ) -> Result<Option<FullName>, DirectoryError> {
        if id.as_ref() == FIXTURE_COLLABORATOR_ID {
            Ok(Some(FullName::new(FIXTURE_COLLABORATOR_NAME)))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DirectoryError::transport("connection refused"), true)]
    #[case(DirectoryError::timeout("deadline exceeded"), true)]
    #[case(DirectoryError::rate_limited("slow down"), true)]
    #[case(DirectoryError::decode("unexpected shape"), false)]
    #[case(DirectoryError::invalid_request("bad column"), false)]
    fn retryability_follows_the_failure_category(
        #[case] error: DirectoryError,
        #[case] retryable: bool,
    ) {
        assert_eq!(error.is_retryable(), retryable);
    }

    #[tokio::test]
    async fn fixture_resolves_only_its_known_identifier() {
        let directory = FixtureCollaboratorDirectory;
        let known = CollaboratorId::new(FIXTURE_COLLABORATOR_ID).expect("valid id");
        let unknown = CollaboratorId::new("col-9999").expect("valid id");

        let hit = directory.find_full_name(&known).await.expect("lookup ok");
        assert_eq!(hit, Some(FullName::new(FIXTURE_COLLABORATOR_NAME)));

        let miss = directory.find_full_name(&unknown).await.expect("lookup ok");
        assert_eq!(miss, None);
    }
}
