//! Domain primitives and the login use case.
//!
//! Purpose: keep the login rules free of transport concerns. Inbound
//! adapters translate HTTP into a [`ControllerRequest`] and render the
//! [`ControllerResponse`] they get back.
//!
//! Public surface:
//! - LoginController (alias to `login_controller::LoginController`) — the
//!   login orchestration.
//! - ControllerError — failure taxonomy carried in 400 and 500 responses.
//! - ControllerRequest / ControllerResponse — transport-neutral envelopes.
//! - AccessToken — opaque credential issued on success.
//! - Error / ErrorCode — HTTP error payload rendered by inbound adapters.
//! - TraceId — per-request correlation identifier.

pub mod access_token;
pub mod controller_error;
pub mod error;
pub mod login_controller;
pub mod ports;
pub mod request;
pub mod response;
pub mod trace_id;

pub use self::access_token::{AccessToken, AccessTokenValidationError};
pub use self::controller_error::ControllerError;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::login_controller::{LoginController, REQUIRED_FIELDS};
pub use self::request::ControllerRequest;
pub use self::response::{
    AccessTokenPayload, ControllerResponse, ResponseBody, ResponseStatus, bad_request, ok,
    server_error, unauthorized,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
