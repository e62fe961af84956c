//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror the wire shape of their domain counterparts and are
//! registered with utoipa under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// A required field is missing, a field is invalid, or the body is
    /// malformed.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials were rejected.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// A collaborator faulted while the request was processed.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Missing param: email")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field and failure reason for 400 responses.
    #[schema(example = json!({ "field": "email", "reason": "missing_param" }))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for the login request body.
///
/// The body is read as an open JSON object; only these two fields matter.
#[derive(ToSchema)]
#[schema(as = crate::domain::ControllerRequest)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LoginRequestSchema {
    /// Account email address.
    #[schema(example = "admin@example.com")]
    email: String,
    /// Account password.
    #[schema(example = "password", format = Password)]
    password: String,
}

/// OpenAPI schema for [`crate::domain::AccessTokenPayload`].
#[derive(ToSchema)]
#[schema(as = crate::domain::AccessTokenPayload, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AccessTokenSchema {
    /// Opaque bearer token.
    #[schema(example = "6f1c7a0e2b9d4c58a3e1f0d2c4b6a8e0")]
    access_token: String,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        // utoipa replaces :: with . in schema names
        assert_eq!(ErrorCodeSchema::name(), "crate.domain.ErrorCode");
        for code in ["invalid_request", "unauthorized", "internal_error"] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    fn error_schema_uses_camel_case_fields() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert_eq!(ErrorSchema::name(), "crate.domain.Error");
        assert!(schema_json.contains("traceId"), "{schema_json}");
        assert!(!schema_json.contains("trace_id"), "{schema_json}");
    }

    #[rstest]
    fn access_token_schema_matches_wire_name() {
        let schema_json = schema_to_json::<AccessTokenSchema>();
        assert!(schema_json.contains("accessToken"), "{schema_json}");
    }

    #[rstest]
    fn login_request_schema_names_both_fields() {
        let schema_json = schema_to_json::<LoginRequestSchema>();
        assert!(schema_json.contains("email"));
        assert!(schema_json.contains("password"));
    }
}
