//! Staff member data model.
//!
//! The dashboard greets whoever is on duty. Profiles arrive from the
//! hosting shell's authentication context and may legitimately be absent,
//! in which case views fall back to a generic form of address.

use std::fmt;

/// Validation errors returned by the staff profile constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffValidationError {
    EmptyDisplayName,
    DisplayNameTooLong { max: usize },
}

impl fmt::Display for StaffValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::DisplayNameTooLong { max } => {
                write!(f, "display name must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for StaffValidationError {}

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 80;

/// Human readable name shown in the dashboard greeting.
///
/// Accented characters are valid; Brazilian Portuguese names routinely
/// carry them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`] from owned input.
    pub fn new(display_name: impl Into<String>) -> Result<Self, StaffValidationError> {
        Self::from_owned(display_name.into())
    }

    fn from_owned(display_name: String) -> Result<Self, StaffValidationError> {
        if display_name.trim().is_empty() {
            return Err(StaffValidationError::EmptyDisplayName);
        }

        if display_name.chars().count() > DISPLAY_NAME_MAX {
            return Err(StaffValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }

        Ok(Self(display_name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = StaffValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Profile of the staff member currently signed in.
///
/// ## Invariants
/// - `display_name` must be non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffProfile {
    display_name: DisplayName,
}

impl StaffProfile {
    /// Build a new [`StaffProfile`] from a validated display name.
    pub fn new(display_name: DisplayName) -> Self {
        Self { display_name }
    }

    /// Fallible constructor enforcing the display name invariant.
    ///
    /// # Examples
    /// ```
    /// use plantao_backend::domain::StaffProfile;
    ///
    /// let profile = StaffProfile::try_from_name("Ana")?;
    /// assert_eq!(profile.display_name().as_ref(), "Ana");
    /// # Ok::<(), plantao_backend::domain::StaffValidationError>(())
    /// ```
    pub fn try_from_name(display_name: impl Into<String>) -> Result<Self, StaffValidationError> {
        Ok(Self::new(DisplayName::new(display_name)?))
    }

    /// Display name shown in the greeting.
    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn display_name_rejects_blank_input(#[case] input: &str) {
        assert_eq!(
            DisplayName::new(input),
            Err(StaffValidationError::EmptyDisplayName)
        );
    }

    #[test]
    fn display_name_rejects_overlong_input() {
        let input = "a".repeat(DISPLAY_NAME_MAX + 1);
        assert_eq!(
            DisplayName::new(input),
            Err(StaffValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX
            })
        );
    }

    #[rstest]
    #[case("Ana")]
    #[case("José Álvaro")]
    #[case("Conceição")]
    fn display_name_accepts_accented_names(#[case] input: &str) {
        let name = DisplayName::new(input).expect("valid display name");
        assert_eq!(name.as_ref(), input);
    }

    #[test]
    fn profile_exposes_its_display_name() {
        let profile = StaffProfile::try_from_name("Ana").expect("valid profile");
        assert_eq!(profile.display_name().to_string(), "Ana");
    }
}
