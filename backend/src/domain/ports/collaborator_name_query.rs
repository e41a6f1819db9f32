//! Driving port for collaborator name lookups.
//!
//! Callers hand over whatever identifier they hold, raw. The port never
//! fails: blank input, a missing record, and a directory fault all come
//! back as values, and the caller picks its own display policy for each.

use async_trait::async_trait;

use super::collaborator_directory::DirectoryError;
use crate::domain::collaborator::FullName;

/// Outcome of one name lookup.
///
/// `NotFound` is a clean answer from the directory (or a blank
/// identifier); `Unavailable` means the question went unanswered and
/// carries the fault for callers that want to retry or report it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameLookup {
    /// The directory holds a record for the identifier.
    Found(FullName),
    /// No record matches, or the identifier was blank.
    NotFound,
    /// The directory could not be consulted.
    Unavailable(DirectoryError),
}

impl NameLookup {
    /// The resolved name, when one was found.
    pub fn name(&self) -> Option<&FullName> {
        match self {
            Self::Found(name) => Some(name),
            Self::NotFound | Self::Unavailable(_) => None,
        }
    }
}

/// Port for resolving collaborator display names.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CollaboratorNameQuery: Send + Sync {
    /// Resolve the display name for a raw collaborator identifier.
    async fn display_name(&self, raw_id: &str) -> NameLookup;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_only_exposed_for_found_lookups() {
        let found = NameLookup::Found(FullName::new("Ana Beatriz Souza"));
        assert_eq!(found.name().map(AsRef::as_ref), Some("Ana Beatriz Souza"));

        assert_eq!(NameLookup::NotFound.name(), None);
        let unavailable = NameLookup::Unavailable(DirectoryError::timeout("deadline"));
        assert_eq!(unavailable.name(), None);
    }
}
