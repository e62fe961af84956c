//! Driven port verifying credentials and issuing access tokens.
//!
//! `Ok(None)` means the credentials were rejected. `Err` means the check
//! itself failed. Callers must keep those two apart: one is a 401, the other
//! a 500.

use async_trait::async_trait;
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::AccessToken;

use super::define_port_error;

define_port_error! {
    /// Faults raised by authentication adapters.
    pub enum AuthenticationError {
        /// The backing store or identity provider failed.
        Backend { message: String } => "authentication backend failed: {message}",
        /// The check did not complete in time.
        Timeout { message: String } => "authentication timed out: {message}",
    }
}

/// Capability checking credentials.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Authentication: Send + Sync {
    /// Verify `email` and `password`, returning a token on success and
    /// `None` when the credentials are rejected.
    async fn auth(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AccessToken>, AuthenticationError>;
}

/// Single-account authenticator used until a real identity store is wired.
///
/// Every successful call mints a fresh random token.
#[derive(Clone)]
pub struct FixtureAuthentication {
    email: String,
    password: Zeroizing<String>,
}

impl FixtureAuthentication {
    /// Default account email.
    pub const DEFAULT_EMAIL: &'static str = "admin@example.com";
    /// Default account password.
    pub const DEFAULT_PASSWORD: &'static str = "password";

    /// Accept exactly one account.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Zeroizing::new(password.into()),
        }
    }
}

impl Default for FixtureAuthentication {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EMAIL, Self::DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for FixtureAuthentication {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixtureAuthentication")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Authentication for FixtureAuthentication {
    async fn auth(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AccessToken>, AuthenticationError> {
        if email != self.email || password != self.password.as_str() {
            return Ok(None);
        }
        AccessToken::new(Uuid::new_v4().simple().to_string())
            .map(Some)
            .map_err(|err| AuthenticationError::backend(format!("fixture token rejected: {err}")))
    }
}
