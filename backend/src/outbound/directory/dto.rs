//! DTOs for decoding directory row responses.
//!
//! The adapter decodes into these transport DTOs first, then maps into
//! domain records (`FullName`) in one pass.

use serde::Deserialize;

use crate::domain::FullName;

/// One collaborator row projected to the name column.
#[derive(Debug, Deserialize)]
pub(super) struct CollaboratorRowDto {
    // Field name mirrors `schema::NAME_COLUMN`.
    #[serde(rename = "nome_completo")]
    pub(super) full_name: String,
}

impl CollaboratorRowDto {
    pub(super) fn into_full_name(self) -> FullName {
        FullName::new(self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::directory::schema;

    #[test]
    fn rename_matches_the_projected_column() {
        assert_eq!(schema::NAME_COLUMN, "nome_completo");
        let row: CollaboratorRowDto =
            serde_json::from_str(r#"{"nome_completo":"Ana Beatriz Souza"}"#).expect("row decodes");
        assert_eq!(row.into_full_name(), FullName::new("Ana Beatriz Souza"));
    }

    #[test]
    fn rows_without_the_name_column_fail_to_decode() {
        let result: Result<CollaboratorRowDto, _> = serde_json::from_str(r#"{"id":"col-1"}"#);
        assert!(result.is_err());
    }
}
