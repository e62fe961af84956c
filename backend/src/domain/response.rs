//! Uniform response envelope and the builders that produce it.
//!
//! Every outcome of a login is one of four shapes. The builders are pure
//! and total; the status set is closed so no other code can appear.

use serde::Serialize;

use super::{AccessToken, ControllerError};

/// Status of a controller outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    /// 200: credentials accepted.
    Ok,
    /// 400: the request was missing or carried an invalid field.
    BadRequest,
    /// 401: credentials rejected.
    Unauthorized,
    /// 500: a collaborator faulted.
    InternalServerError,
}

impl ResponseStatus {
    /// Numeric HTTP-style status code.
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::Unauthorized => 401,
            Self::InternalServerError => 500,
        }
    }
}

/// Success payload: `{"accessToken": "<token>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenPayload {
    access_token: AccessToken,
}

impl AccessTokenPayload {
    /// Wrap an issued token.
    #[must_use]
    pub fn new(access_token: AccessToken) -> Self {
        Self { access_token }
    }

    /// The issued token.
    #[must_use]
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }
}

/// Body carried by a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Failure description for 400 and 500 outcomes.
    Error(ControllerError),
    /// Success payload for 200 outcomes.
    AccessToken(AccessTokenPayload),
}

impl From<ControllerError> for ResponseBody {
    fn from(value: ControllerError) -> Self {
        Self::Error(value)
    }
}

impl From<AccessTokenPayload> for ResponseBody {
    fn from(value: AccessTokenPayload) -> Self {
        Self::AccessToken(value)
    }
}

/// Response envelope `{status, body}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerResponse {
    status: ResponseStatus,
    body: Option<ResponseBody>,
}

impl ControllerResponse {
    /// Outcome status.
    #[must_use]
    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    /// Numeric status code.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// Body, absent for 401.
    #[must_use]
    pub fn body(&self) -> Option<&ResponseBody> {
        self.body.as_ref()
    }

    /// Error carried by the body, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ControllerError> {
        match &self.body {
            Some(ResponseBody::Error(error)) => Some(error),
            _ => None,
        }
    }

    /// Split into status and body.
    #[must_use]
    pub fn into_parts(self) -> (ResponseStatus, Option<ResponseBody>) {
        (self.status, self.body)
    }
}

/// `{400, error}`
#[must_use]
pub fn bad_request(error: ControllerError) -> ControllerResponse {
    ControllerResponse {
        status: ResponseStatus::BadRequest,
        body: Some(error.into()),
    }
}

/// `{401, absent}`
#[must_use]
pub fn unauthorized() -> ControllerResponse {
    ControllerResponse {
        status: ResponseStatus::Unauthorized,
        body: None,
    }
}

/// `{500, error}`
#[must_use]
pub fn server_error(error: ControllerError) -> ControllerResponse {
    ControllerResponse {
        status: ResponseStatus::InternalServerError,
        body: Some(error.into()),
    }
}

/// `{200, payload}`
#[must_use]
pub fn ok(payload: AccessTokenPayload) -> ControllerResponse {
    ControllerResponse {
        status: ResponseStatus::Ok,
        body: Some(payload.into()),
    }
}
