//! Directory connection settings.
//!
//! This module centralises the environment-driven directory settings so
//! they are validated consistently and can be tested in isolation. Debug
//! builds may run without a directory (the fixture serves lookups);
//! release builds must point at a real deployment.

use mockable::Env;
use reqwest::Url;
use tracing::warn;

const DIRECTORY_URL_ENV: &str = "DIRECTORY_URL";
const DIRECTORY_API_KEY_ENV: &str = "DIRECTORY_API_KEY";
const URL_EXPECTED: &str = "absolute http(s) URL, e.g. https://records.example.net";

/// Build mode for configuration validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing directory and fall back to fixtures.
    Debug,
    /// Release builds require an explicit, valid directory URL.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plantao_backend::outbound::directory::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Connection settings for the hosted collaborator directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Project root URL; the REST path is derived from it.
    pub base_url: Url,
    /// Service key sent as `apikey` and bearer token when present.
    pub api_key: Option<String>,
}

/// Errors raised while validating directory configuration.
#[derive(thiserror::Error, Debug)]
pub enum DirectoryConfigError {
    /// A required environment variable is missing.
    #[error("missing required environment variable: {name}")]
    MissingEnv { name: &'static str },
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Build directory settings from environment variables and build mode.
///
/// Returns `Ok(None)` when no directory is configured and the build mode
/// tolerates running on fixtures.
///
/// # Examples
///
/// ```rust
/// use mockable::MockEnv;
/// use plantao_backend::outbound::directory::{BuildMode, directory_config_from_env};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "DIRECTORY_URL" => Some("https://records.example.net".to_string()),
///     "DIRECTORY_API_KEY" => Some("service-key".to_string()),
///     _ => None,
/// });
///
/// let config = directory_config_from_env(&env, BuildMode::Release)?;
/// let config = config.expect("directory configured");
/// assert_eq!(config.api_key.as_deref(), Some("service-key"));
/// # Ok(())
/// # }
/// ```
pub fn directory_config_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<Option<DirectoryConfig>, DirectoryConfigError> {
    let Some(raw_url) = env.string(DIRECTORY_URL_ENV) else {
        if mode.is_debug() {
            warn!("DIRECTORY_URL not set; collaborator lookups will use the fixture directory");
            return Ok(None);
        }
        return Err(DirectoryConfigError::MissingEnv {
            name: DIRECTORY_URL_ENV,
        });
    };

    let base_url = parse_directory_url(&raw_url)?;
    let api_key = api_key_from_env(env);

    Ok(Some(DirectoryConfig { base_url, api_key }))
}

fn parse_directory_url(raw: &str) -> Result<Url, DirectoryConfigError> {
    let invalid = || DirectoryConfigError::InvalidEnv {
        name: DIRECTORY_URL_ENV,
        value: raw.to_owned(),
        expected: URL_EXPECTED,
    };

    let url = Url::parse(raw).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid());
    }
    Ok(url)
}

fn api_key_from_env<E: Env>(env: &E) -> Option<String> {
    match env.string(DIRECTORY_API_KEY_ENV) {
        Some(value) if value.trim().is_empty() => {
            warn!("DIRECTORY_API_KEY is blank; sending unauthenticated requests");
            None
        }
        other => other,
    }
}
