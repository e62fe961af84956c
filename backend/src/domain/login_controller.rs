//! Login orchestration.
//!
//! The controller checks the request shape, asks the [`EmailValidator`]
//! about the address, asks [`Authentication`] about the credentials, and maps
//! the result onto a [`ControllerResponse`]. Collaborator faults never leave
//! [`Controller::handle`]: they become a 500 envelope at a single boundary.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::FutureExt;
use tracing::{debug, error, info, warn};
use zeroize::Zeroizing;

use super::ports::{Authentication, AuthenticationError, Controller, EmailValidator, EmailValidatorError};
use super::response::{bad_request, ok, server_error, unauthorized};
use super::{AccessTokenPayload, ControllerError, ControllerRequest, ControllerResponse};

/// Fields every login request must carry, in the order they are checked.
pub const REQUIRED_FIELDS: [&str; 2] = ["email", "password"];

/// Faults raised by collaborators while a request is processed.
#[derive(Debug, thiserror::Error)]
enum CollaboratorFault {
    #[error(transparent)]
    EmailValidator(#[from] EmailValidatorError),
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),
    #[error("collaborator panicked: {0}")]
    Panicked(String),
}

/// Login use-case controller.
///
/// Holds only shared, immutable handles to its two capabilities, so one
/// instance can serve concurrent requests.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use login_gateway::domain::ports::{Controller, FixtureAuthentication, FixtureEmailValidator};
/// use login_gateway::domain::{ControllerRequest, LoginController};
/// use serde_json::json;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let controller = LoginController::new(
///     Arc::new(FixtureEmailValidator),
///     Arc::new(FixtureAuthentication::default()),
/// );
/// let response = controller
///     .handle(ControllerRequest::from_value(json!({ "password": "x" })))
///     .await;
/// assert_eq!(response.status_code(), 400);
/// # });
/// ```
#[derive(Clone)]
pub struct LoginController {
    email_validator: Arc<dyn EmailValidator>,
    authentication: Arc<dyn Authentication>,
}

impl LoginController {
    /// Wire the controller to its capabilities.
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        authentication: Arc<dyn Authentication>,
    ) -> Self {
        Self {
            email_validator,
            authentication,
        }
    }

    async fn process(
        &self,
        mut request: ControllerRequest,
    ) -> Result<ControllerResponse, CollaboratorFault> {
        for field in REQUIRED_FIELDS {
            if !request.has_field(field) {
                debug!(field, "login rejected: missing parameter");
                return Ok(bad_request(ControllerError::missing_param(field)));
            }
        }

        let Some(email) = request.take_text("email") else {
            debug!(field = "email", "login rejected: parameter is not text");
            return Ok(bad_request(ControllerError::invalid_param("email")));
        };
        let Some(password) = request.take_text("password").map(Zeroizing::new) else {
            debug!(field = "password", "login rejected: parameter is not text");
            return Ok(bad_request(ControllerError::invalid_param("password")));
        };

        if !self.email_validator.is_valid(&email)? {
            debug!(field = "email", "login rejected: invalid email");
            return Ok(bad_request(ControllerError::invalid_param("email")));
        }

        match self.authentication.auth(&email, password.as_str()).await? {
            Some(token) => {
                info!("login succeeded");
                Ok(ok(AccessTokenPayload::new(token)))
            }
            None => {
                warn!("login rejected: invalid credentials");
                Ok(unauthorized())
            }
        }
    }
}

#[async_trait]
impl Controller for LoginController {
    async fn handle(&self, request: ControllerRequest) -> ControllerResponse {
        let outcome = AssertUnwindSafe(self.process(request))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(CollaboratorFault::Panicked(panic_message(&*payload))));

        match outcome {
            Ok(response) => response,
            Err(fault) => {
                let detail = fault.to_string();
                error!(error = %detail, "login failed: collaborator fault");
                server_error(ControllerError::server_error(detail))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_owned()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_owned()
    }
}
