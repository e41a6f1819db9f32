//! Collaborator name lookup service.
//!
//! Implements [`CollaboratorNameQuery`] over the directory port. The
//! service absorbs every failure mode into a [`NameLookup`] value: blank
//! identifiers never reach the directory, misses stay misses, and faults
//! are logged here before being handed back for the caller's policy.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::collaborator::CollaboratorId;
use crate::domain::ports::{CollaboratorDirectory, CollaboratorNameQuery, NameLookup};

/// Name lookup service implementing the driving port.
#[derive(Clone)]
pub struct CollaboratorNameService<D> {
    directory: Arc<D>,
}

impl<D> CollaboratorNameService<D> {
    /// Create a new service over the given directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self { directory }
    }
}

#[async_trait]
impl<D> CollaboratorNameQuery for CollaboratorNameService<D>
where
    D: CollaboratorDirectory,
{
    async fn display_name(&self, raw_id: &str) -> NameLookup {
        let Ok(id) = CollaboratorId::new(raw_id) else {
            debug!("blank collaborator id; skipping directory lookup");
            return NameLookup::NotFound;
        };

        debug!(collaborator_id = %id, "collaborator name lookup started");
        match self.directory.find_full_name(&id).await {
            Ok(Some(name)) => {
                debug!(collaborator_id = %id, "collaborator name resolved");
                NameLookup::Found(name)
            }
            Ok(None) => {
                debug!(collaborator_id = %id, "collaborator has no directory record");
                NameLookup::NotFound
            }
            Err(error) => {
                warn!(collaborator_id = %id, error = %error, "collaborator name lookup failed");
                NameLookup::Unavailable(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collaborator::FullName;
    use crate::domain::ports::{DirectoryError, MockCollaboratorDirectory};
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn service(directory: MockCollaboratorDirectory) -> CollaboratorNameService<MockCollaboratorDirectory> {
        CollaboratorNameService::new(Arc::new(directory))
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[tokio::test]
    async fn blank_ids_resolve_without_touching_the_directory(#[case] raw_id: &str) {
        let mut directory = MockCollaboratorDirectory::new();
        directory.expect_find_full_name().times(0);

        let lookup = service(directory).display_name(raw_id).await;
        assert_eq!(lookup, NameLookup::NotFound);
    }

    #[tokio::test]
    async fn known_ids_resolve_to_the_recorded_name() {
        let mut directory = MockCollaboratorDirectory::new();
        directory
            .expect_find_full_name()
            .withf(|id| id.as_ref() == "col-123")
            .times(1)
            .returning(|_| Ok(Some(FullName::new("Carlos Eduardo Pereira"))));

        let lookup = service(directory).display_name("col-123").await;
        assert_eq!(
            lookup,
            NameLookup::Found(FullName::new("Carlos Eduardo Pereira"))
        );
    }

    #[tokio::test]
    async fn missing_records_resolve_to_not_found() {
        let mut directory = MockCollaboratorDirectory::new();
        directory
            .expect_find_full_name()
            .times(1)
            .returning(|_| Ok(None));

        let lookup = service(directory).display_name("col-404").await;
        assert_eq!(lookup, NameLookup::NotFound);
    }

    #[tokio::test]
    async fn directory_faults_resolve_to_unavailable_with_the_cause() {
        let mut directory = MockCollaboratorDirectory::new();
        directory
            .expect_find_full_name()
            .times(1)
            .returning(|_| Err(DirectoryError::transport("connection refused")));

        let lookup = service(directory).display_name("col-123").await;
        assert_eq!(
            lookup,
            NameLookup::Unavailable(DirectoryError::transport("connection refused"))
        );
    }

    /// Counts emitted events at one level, ignoring everything else.
    struct LevelCounter {
        level: tracing::Level,
        seen: Arc<AtomicUsize>,
    }

    impl tracing::Subscriber for LevelCounter {
        fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
            *metadata.level() == self.level
        }

        fn new_span(&self, _: &tracing::span::Attributes<'_>) -> tracing::span::Id {
            tracing::span::Id::from_u64(1)
        }

        fn record(&self, _: &tracing::span::Id, _: &tracing::span::Record<'_>) {}

        fn record_follows_from(&self, _: &tracing::span::Id, _: &tracing::span::Id) {}

        fn event(&self, _: &tracing::Event<'_>) {
            self.seen.fetch_add(1, Ordering::SeqCst);
        }

        fn enter(&self, _: &tracing::span::Id) {}

        fn exit(&self, _: &tracing::span::Id) {}
    }

    // Current-thread runtime keeps the thread-local subscriber in scope
    // for the whole lookup.
    #[tokio::test]
    async fn directory_faults_emit_a_warning_event() {
        let warnings = Arc::new(AtomicUsize::new(0));
        let _guard = tracing::subscriber::set_default(LevelCounter {
            level: tracing::Level::WARN,
            seen: Arc::clone(&warnings),
        });

        let mut directory = MockCollaboratorDirectory::new();
        directory
            .expect_find_full_name()
            .times(1)
            .returning(|_| Err(DirectoryError::transport("connection refused")));

        let lookup = service(directory).display_name("col-123").await;
        assert!(matches!(lookup, NameLookup::Unavailable(_)));
        assert_eq!(warnings.load(Ordering::SeqCst), 1);
    }
}
