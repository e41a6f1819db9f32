//! Outbound adapter for the hosted collaborator directory.
//!
//! The directory is an opaque, externally managed record store reached
//! over HTTPS. This module owns everything transport-shaped: connection
//! settings ([`config`]), the table and column names ([`schema`]), the
//! wire DTOs ([`dto`]), and the reqwest-backed port implementation
//! ([`http_source`]).

mod config;
mod dto;
mod http_source;
mod schema;

pub use config::{
    BuildMode, DirectoryConfig, DirectoryConfigError, directory_config_from_env,
};
pub use http_source::{
    DEFAULT_DIRECTORY_TIMEOUT, DirectoryBuildError, HttpCollaboratorDirectory,
};
