//! HTTP server configuration object and helpers.

use std::net::{Ipv4Addr, SocketAddr};

use mockable::Env;

use crate::outbound::directory::DirectoryConfig;

const BIND_ADDR_ENV: &str = "BIND_ADDR";
const BIND_ADDR_EXPECTED: &str = "socket address, e.g. 0.0.0.0:8080";

const DEFAULT_PORT: u16 = 8080;

/// Errors raised while validating server configuration.
#[derive(thiserror::Error, Debug)]
pub enum ServerConfigError {
    /// A variable is present but contains an invalid value.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        name: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Read the bind address from `BIND_ADDR`, defaulting to `0.0.0.0:8080`.
///
/// # Errors
///
/// Returns [`ServerConfigError::InvalidEnv`] when the variable is set but
/// does not parse as a socket address.
///
/// # Examples
///
/// ```rust
/// use mockable::MockEnv;
/// use plantao_backend::server::bind_addr_from_env;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "BIND_ADDR" => Some("127.0.0.1:9090".to_string()),
///     _ => None,
/// });
///
/// let addr = bind_addr_from_env(&env)?;
/// assert_eq!(addr.port(), 9090);
/// # Ok(())
/// # }
/// ```
pub fn bind_addr_from_env<E: Env>(env: &E) -> Result<SocketAddr, ServerConfigError> {
    let Some(raw) = env.string(BIND_ADDR_ENV) else {
        return Ok(SocketAddr::new(Ipv4Addr::UNSPECIFIED.into(), DEFAULT_PORT));
    };
    raw.parse().map_err(|_| ServerConfigError::InvalidEnv {
        name: BIND_ADDR_ENV,
        value: raw,
        expected: BIND_ADDR_EXPECTED,
    })
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) directory: Option<DirectoryConfig>,
}

impl ServerConfig {
    /// Construct a server configuration bound to the given address.
    #[must_use]
    pub const fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            directory: None,
        }
    }

    /// Attach hosted directory settings for collaborator lookups.
    ///
    /// Without them the server serves lookups from the fixture directory,
    /// which is only acceptable in debug builds.
    #[must_use]
    pub fn with_directory(mut self, directory: DirectoryConfig) -> Self {
        self.directory = Some(directory);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub const fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockable::MockEnv;
    use reqwest::Url;

    fn env_with(bind_addr: Option<&str>) -> MockEnv {
        let bind_addr = bind_addr.map(str::to_owned);
        let mut env = MockEnv::new();
        env.expect_string().returning(move |name| match name {
            BIND_ADDR_ENV => bind_addr.clone(),
            _ => None,
        });
        env
    }

    #[test]
    fn bind_addr_defaults_to_all_interfaces_on_8080() {
        let addr = bind_addr_from_env(&env_with(None)).expect("default parses");
        assert_eq!(addr.to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn bind_addr_honours_the_environment() {
        let addr =
            bind_addr_from_env(&env_with(Some("127.0.0.1:9090"))).expect("explicit addr parses");
        assert_eq!(addr.to_string(), "127.0.0.1:9090");
    }

    #[test]
    fn bind_addr_rejects_garbage() {
        let error =
            bind_addr_from_env(&env_with(Some("not-an-addr"))).expect_err("garbage fails");
        assert!(matches!(
            error,
            ServerConfigError::InvalidEnv {
                name: BIND_ADDR_ENV,
                ..
            }
        ));
    }

    #[test]
    fn directory_settings_are_absent_by_default() {
        let config = ServerConfig::new(([127, 0, 0, 1], 0).into());
        assert!(config.directory.is_none());
    }

    #[test]
    fn with_directory_records_the_settings() {
        let directory = DirectoryConfig {
            base_url: Url::parse("https://records.example.net").expect("valid base URL"),
            api_key: None,
        };
        let config = ServerConfig::new(([127, 0, 0, 1], 0).into()).with_directory(directory);
        assert!(config.directory.is_some());
        assert_eq!(config.bind_addr().port(), 0);
    }
}
