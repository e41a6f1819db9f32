//! HTTP inbound adapter exposing REST endpoints.

pub mod collaborators;
pub mod dashboard;
pub mod error;
pub mod health;
pub mod state;

pub use error::ApiResult;
