//! Gateway settings loaded via OrthoConfig.
//!
//! Values layer from CLI flags, `LOGIN_GATEWAY_*` environment variables and
//! configuration files. Unset values fall back to the defaults below.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::ports::FixtureAuthentication;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 8080;

/// Runtime configuration for the login gateway binary.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "LOGIN_GATEWAY")]
pub struct GatewaySettings {
    /// Address the HTTP listener binds to.
    pub host: Option<IpAddr>,
    /// Port the HTTP listener binds to.
    pub port: Option<u16>,
    /// Emit human-readable logs instead of JSON.
    #[ortho_config(default = false)]
    pub pretty_logs: bool,
    /// Email of the single account accepted by the fixture authenticator.
    pub fixture_email: Option<String>,
    /// Password of the single account accepted by the fixture authenticator.
    pub fixture_password: Option<String>,
}

impl GatewaySettings {
    /// Socket address built from the configured host and port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }

    /// Fixture account email, or the built-in default.
    pub fn fixture_email(&self) -> &str {
        self.fixture_email
            .as_deref()
            .unwrap_or(FixtureAuthentication::DEFAULT_EMAIL)
    }

    /// Fixture account password, or the built-in default.
    pub fn fixture_password(&self) -> &str {
        self.fixture_password
            .as_deref()
            .unwrap_or(FixtureAuthentication::DEFAULT_PASSWORD)
    }

    /// Authenticator accepting the configured fixture account.
    pub fn fixture_authentication(&self) -> FixtureAuthentication {
        FixtureAuthentication::new(self.fixture_email(), self.fixture_password())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for gateway settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    use crate::domain::ports::Authentication;

    const VARS: [&str; 5] = [
        "LOGIN_GATEWAY_HOST",
        "LOGIN_GATEWAY_PORT",
        "LOGIN_GATEWAY_PRETTY_LOGS",
        "LOGIN_GATEWAY_FIXTURE_EMAIL",
        "LOGIN_GATEWAY_FIXTURE_PASSWORD",
    ];

    fn load_from_empty_args() -> GatewaySettings {
        GatewaySettings::load_from_iter([OsString::from("login-gateway")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "0.0.0.0:8080".parse().expect("socket addr"));
        assert!(!settings.pretty_logs);
        assert_eq!(settings.fixture_email(), "admin@example.com");
        assert_eq!(settings.fixture_password(), "password");
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("LOGIN_GATEWAY_HOST", Some("127.0.0.1".to_owned())),
            ("LOGIN_GATEWAY_PORT", Some("9090".to_owned())),
            ("LOGIN_GATEWAY_PRETTY_LOGS", Some("true".to_owned())),
            ("LOGIN_GATEWAY_FIXTURE_EMAIL", Some("ops@example.org".to_owned())),
            ("LOGIN_GATEWAY_FIXTURE_PASSWORD", Some("s3cret".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.bind_addr(), "127.0.0.1:9090".parse().expect("socket addr"));
        assert!(settings.pretty_logs);
        assert_eq!(settings.fixture_email(), "ops@example.org");
        assert_eq!(settings.fixture_password(), "s3cret");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_authentication_uses_configured_account() {
        let settings = {
            let _guard = lock_env([
                ("LOGIN_GATEWAY_FIXTURE_EMAIL", Some("ops@example.org".to_owned())),
                ("LOGIN_GATEWAY_FIXTURE_PASSWORD", Some("s3cret".to_owned())),
            ]);
            load_from_empty_args()
        };

        let auth = settings.fixture_authentication();
        let accepted = auth.auth("ops@example.org", "s3cret").await.expect("no fault");
        let rejected = auth.auth("admin@example.com", "password").await.expect("no fault");
        assert!(accepted.is_some());
        assert!(rejected.is_none());
    }
}
