//! Failure taxonomy produced by the login controller.
//!
//! Each variant carries only what is needed to describe the failure. A
//! rejected login is deliberately absent: it is a normal negative outcome,
//! not an error.

/// Tagged controller failure.
///
/// # Examples
/// ```
/// use login_gateway::domain::ControllerError;
///
/// let err = ControllerError::missing_param("email");
/// assert_eq!(err.to_string(), "Missing param: email");
/// assert_eq!(err.field(), Some("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// A required field was absent or falsy.
    #[error("Missing param: {field}")]
    MissingParam {
        /// Name of the missing field.
        field: String,
    },
    /// A field was present but failed a validity check.
    #[error("Invalid param: {field}")]
    InvalidParam {
        /// Name of the offending field.
        field: String,
    },
    /// A collaborator faulted while the request was processed.
    ///
    /// `detail` is diagnostic text for operators only.
    #[error("Internal server error")]
    ServerError {
        /// Diagnostic description of the fault.
        detail: String,
    },
}

impl ControllerError {
    /// Construct [`ControllerError::MissingParam`].
    pub fn missing_param(field: impl Into<String>) -> Self {
        Self::MissingParam {
            field: field.into(),
        }
    }

    /// Construct [`ControllerError::InvalidParam`].
    pub fn invalid_param(field: impl Into<String>) -> Self {
        Self::InvalidParam {
            field: field.into(),
        }
    }

    /// Construct [`ControllerError::ServerError`].
    pub fn server_error(detail: impl Into<String>) -> Self {
        Self::ServerError {
            detail: detail.into(),
        }
    }

    /// Field the error refers to, for parameter errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingParam { field } | Self::InvalidParam { field } => Some(field),
            Self::ServerError { .. } => None,
        }
    }

    /// Diagnostic detail, for server errors.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::ServerError { detail } => Some(detail),
            Self::MissingParam { .. } | Self::InvalidParam { .. } => None,
        }
    }

    /// Snake-case tag naming the variant.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingParam { .. } => "missing_param",
            Self::InvalidParam { .. } => "invalid_param",
            Self::ServerError { .. } => "server_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ControllerError::missing_param("password"), "Missing param: password")]
    #[case(ControllerError::invalid_param("email"), "Invalid param: email")]
    #[case(ControllerError::server_error("stack"), "Internal server error")]
    fn messages_follow_the_taxonomy(#[case] error: ControllerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn server_error_keeps_detail_out_of_the_message() {
        let error = ControllerError::server_error("db pool exhausted");
        assert!(!error.to_string().contains("db pool"));
        assert_eq!(error.detail(), Some("db pool exhausted"));
        assert_eq!(error.field(), None);
    }

    #[rstest]
    #[case(ControllerError::missing_param("email"), "missing_param")]
    #[case(ControllerError::invalid_param("email"), "invalid_param")]
    #[case(ControllerError::server_error("x"), "server_error")]
    fn kind_tags_each_variant(#[case] error: ControllerError, #[case] expected: &str) {
        assert_eq!(error.kind(), expected);
    }
}
