//! Table and column names owned by the records team.
//!
//! The hosted store's schema is managed outside this repository; these
//! constants are the single place the names appear in query building.

/// Table holding one row per collaborator.
pub(crate) const COLLABORATORS_TABLE: &str = "colaboradores";

/// Primary key column queried by identifier lookups.
pub(crate) const ID_COLUMN: &str = "id";

/// Column carrying the collaborator's full display name.
pub(crate) const NAME_COLUMN: &str = "nome_completo";
