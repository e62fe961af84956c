//! Driven port checking the format of an email address.
//!
//! The real rule set (regex, deny lists, library) lives outside the core.
//! The controller only cares whether the answer is yes, no, or a fault.

use super::define_port_error;

define_port_error! {
    /// Faults raised by email validator adapters.
    pub enum EmailValidatorError {
        /// The validator could not produce an answer.
        Unavailable { message: String } => "email validator unavailable: {message}",
    }
}

/// Capability answering whether an email address is well formed.
#[cfg_attr(test, mockall::automock)]
pub trait EmailValidator: Send + Sync {
    /// Return `Ok(true)` for a well-formed address, `Ok(false)` otherwise.
    ///
    /// `Err` signals a fault, never a negative answer.
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

/// Structural validator used until a dedicated library is wired.
///
/// Accepts `local@domain.tld` shapes: exactly one `@`, a non-empty local
/// part, a domain with an inner dot, and no whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureEmailValidator;

impl EmailValidator for FixtureEmailValidator {
    fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        if email.chars().any(char::is_whitespace) {
            return Ok(false);
        }
        let Some((local, domain)) = email.split_once('@') else {
            return Ok(false);
        };
        if local.is_empty() || domain.contains('@') {
            return Ok(false);
        }
        let inner_dot = domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
            && !domain.ends_with('.');
        Ok(inner_dot)
    }
}
