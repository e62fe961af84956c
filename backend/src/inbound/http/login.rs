//! Login endpoint.
//!
//! ```text
//! POST /api/v1/login {"email":"admin@example.com","password":"password"}
//! ```
//!
//! The handler decodes the body into a [`ControllerRequest`], hands it to
//! the login controller, and renders the returned envelope. It makes no
//! decisions of its own beyond rejecting bodies that are not JSON.

use actix_web::{HttpResponse, post, web};
use serde_json::{Value, json};

use crate::domain::{
    ControllerError, ControllerRequest, ControllerResponse, Error, ResponseBody,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{AccessTokenSchema, ErrorSchema, LoginRequestSchema};
use crate::inbound::http::state::HttpState;

/// Authenticate with email and password and receive an access token.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = LoginRequestSchema,
    responses(
        (status = 200, description = "Login success", body = AccessTokenSchema),
        (status = 400, description = "Missing or invalid parameter, or malformed body", body = ErrorSchema),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["auth"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(state: web::Data<HttpState>, body: web::Bytes) -> ApiResult<HttpResponse> {
    let request = parse_body(&body)?;
    let response = state.login.handle(request).await;
    render(response)
}

/// An empty body is an empty mapping; anything else must be JSON.
fn parse_body(body: &[u8]) -> ApiResult<ControllerRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ControllerRequest::default());
    }
    serde_json::from_slice::<Value>(body)
        .map(ControllerRequest::from_value)
        .map_err(|err| {
            Error::invalid_request("request body must be valid JSON").with_details(json!({
                "reason": "malformed_body",
                "detail": err.to_string(),
            }))
        })
}

/// The builders tie each body to its status: a token is 200, no body is
/// 401 and an error is 400 or 500 according to its variant.
fn render(response: ControllerResponse) -> ApiResult<HttpResponse> {
    let (_, body) = response.into_parts();
    match body {
        Some(ResponseBody::AccessToken(payload)) => Ok(HttpResponse::Ok().json(payload)),
        Some(ResponseBody::Error(err)) => Err(map_controller_error(err)),
        None => Ok(HttpResponse::Unauthorized().finish()),
    }
}

fn map_controller_error(err: ControllerError) -> Error {
    let message = err.to_string();
    match err {
        ControllerError::MissingParam { ref field } | ControllerError::InvalidParam { ref field } => {
            Error::invalid_request(message)
                .with_details(json!({ "field": field, "reason": err.kind() }))
        }
        ControllerError::ServerError { detail } => {
            Error::internal(message).with_details(json!({ "detail": detail }))
        }
    }
}
