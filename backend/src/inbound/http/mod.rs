//! HTTP inbound adapter exposing the login and health endpoints.

pub mod error;
pub mod health;
pub mod login;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
