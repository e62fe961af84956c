//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the login and health paths plus the schema wrappers
//! from [`crate::inbound::http::schemas`], so domain types stay free of
//! utoipa derives. `cargo run --bin openapi-dump` prints the document.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    AccessTokenSchema, ErrorCodeSchema, ErrorSchema, LoginRequestSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Login gateway API",
        description = "Credential login issuing access tokens, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::login::login,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LoginRequestSchema,
        AccessTokenSchema,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "auth", description = "Credential login"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema fields.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";
    const ACCESS_TOKEN_SCHEMA_NAME: &str = "crate.domain.AccessTokenPayload";
    const LOGIN_REQUEST_SCHEMA_NAME: &str = "crate.domain.ControllerRequest";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case(ERROR_SCHEMA_NAME, "code")]
    #[case(ERROR_SCHEMA_NAME, "message")]
    #[case(ERROR_SCHEMA_NAME, "traceId")]
    #[case(ACCESS_TOKEN_SCHEMA_NAME, "accessToken")]
    #[case(LOGIN_REQUEST_SCHEMA_NAME, "email")]
    #[case(LOGIN_REQUEST_SCHEMA_NAME, "password")]
    fn registered_schemas_have_wire_fields(#[case] schema_name: &str, #[case] field: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(schema_name).expect("schema registered");
        assert_object_schema_has_field(schema, field);
    }

    #[rstest]
    #[case("/api/v1/login")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_documented(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }
}
