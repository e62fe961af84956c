//! Domain ports for the hexagonal boundary.
//!
//! - [`Controller`] is the driving port inbound adapters call.
//! - [`EmailValidator`] and [`Authentication`] are driven ports the login
//!   controller depends on.

mod macros;
pub(crate) use macros::define_port_error;

mod authentication;
mod controller;
mod email_validator;

#[cfg(test)]
pub use authentication::MockAuthentication;
pub use authentication::{Authentication, AuthenticationError, FixtureAuthentication};
#[cfg(test)]
pub use controller::MockController;
pub use controller::Controller;
#[cfg(test)]
pub use email_validator::MockEmailValidator;
pub use email_validator::{EmailValidator, EmailValidatorError, FixtureEmailValidator};
