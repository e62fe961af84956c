//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on the driving port and remain testable without the real collaborators.

use std::sync::Arc;

use crate::domain::ports::Controller;

/// Dependency bundle for HTTP handlers.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use login_gateway::domain::LoginController;
/// use login_gateway::domain::ports::{FixtureAuthentication, FixtureEmailValidator};
/// use login_gateway::inbound::http::state::HttpState;
///
/// let controller = LoginController::new(
///     Arc::new(FixtureEmailValidator),
///     Arc::new(FixtureAuthentication::default()),
/// );
/// let state = HttpState::new(Arc::new(controller));
/// let _login = state.login.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// Driving port behind `POST /api/v1/login`.
    pub login: Arc<dyn Controller>,
}

impl HttpState {
    /// Bundle the login controller for handlers.
    pub fn new(login: Arc<dyn Controller>) -> Self {
        Self { login }
    }
}
