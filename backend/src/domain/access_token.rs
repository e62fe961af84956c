//! Opaque access token issued on successful authentication.

use serde::Serialize;

/// Validation errors for [`AccessToken`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessTokenValidationError {
    /// The token text was empty.
    #[error("access token must not be empty")]
    Empty,
}

/// Opaque token text handed back to the client.
///
/// ## Invariants
/// - The text is never empty, so a rejected login can only be expressed as
///   the absence of a token.
///
/// `Debug` output is redacted so tokens do not leak into logs.
///
/// # Examples
/// ```
/// use login_gateway::domain::AccessToken;
///
/// let token = AccessToken::new("tok123").unwrap();
/// assert_eq!(token.as_str(), "tok123");
/// assert!(AccessToken::new("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl AccessToken {
    /// Validate and wrap token text.
    pub fn new(value: impl Into<String>) -> Result<Self, AccessTokenValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(AccessTokenValidationError::Empty);
        }
        Ok(Self(value))
    }

    /// Borrow the token text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_the_token() {
        let token = AccessToken::new("secret-token").expect("valid token");
        assert!(!format!("{token:?}").contains("secret-token"));
    }

    #[test]
    fn serialises_as_plain_text() {
        let token = AccessToken::new("tok123").expect("valid token");
        assert_eq!(
            serde_json::to_value(&token).expect("serialise token"),
            serde_json::json!("tok123")
        );
    }
}
