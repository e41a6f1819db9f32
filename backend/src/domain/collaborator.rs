//! Collaborator data model.
//!
//! Collaborators are the people referenced by duty records: physicians,
//! nurses, and support staff. Their canonical records live in the hosted
//! directory; the domain only carries the identifier used to look them up
//! and the full name that comes back.

use std::fmt;

/// Validation errors returned by [`CollaboratorId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollaboratorIdError {
    BlankId,
}

impl fmt::Display for CollaboratorIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BlankId => write!(f, "collaborator id must not be blank"),
        }
    }
}

impl std::error::Error for CollaboratorIdError {}

/// Opaque identifier keying a collaborator record in the directory.
///
/// The directory owns the identifier format, so no shape beyond
/// non-blankness is enforced here. Constructing one guarantees callers
/// never send a blank key to the external store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollaboratorId(String);

impl CollaboratorId {
    /// Validate and construct a [`CollaboratorId`] from borrowed input.
    ///
    /// # Examples
    /// ```
    /// use plantao_backend::domain::CollaboratorId;
    ///
    /// let id = CollaboratorId::new("col-123")?;
    /// assert_eq!(id.as_ref(), "col-123");
    /// assert!(CollaboratorId::new("   ").is_err());
    /// # Ok::<(), plantao_backend::domain::CollaboratorIdError>(())
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, CollaboratorIdError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(CollaboratorIdError::BlankId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for CollaboratorId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CollaboratorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<CollaboratorId> for String {
    fn from(value: CollaboratorId) -> Self {
        value.0
    }
}

/// Full name of a collaborator as recorded in the directory.
///
/// The directory is the source of truth for this value; it is carried
/// verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl FullName {
    /// Wrap a name exactly as the directory returned it.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}
