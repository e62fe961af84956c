//! Tests for server bootstrap, covering readiness signalling and routing.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use rstest::{fixture, rstest};
use serde_json::json;

use login_gateway::domain::LoginController;
use login_gateway::domain::ports::{FixtureAuthentication, FixtureEmailValidator};

use super::{HealthState, HttpState, ServerConfig, build_app, create_server};

#[fixture]
fn health_state() -> web::Data<HealthState> {
    web::Data::new(HealthState::new())
}

#[fixture]
fn controller() -> Arc<LoginController> {
    Arc::new(LoginController::new(
        Arc::new(FixtureEmailValidator),
        Arc::new(FixtureAuthentication::default()),
    ))
}

#[fixture]
fn bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 0))
}

#[rstest]
#[actix_rt::test]
async fn create_server_records_the_bound_address(
    health_state: web::Data<HealthState>,
    controller: Arc<LoginController>,
    bind_address: SocketAddr,
) {
    assert!(!health_state.is_ready(), "state should start unready");

    let config = ServerConfig::new(bind_address, controller);
    assert_eq!(config.bind_addr(), bind_address);
    let _server = create_server(health_state.clone(), config).expect("server should build");

    let listening = health_state.listening().expect("bound address recorded");
    assert_eq!(listening.ip(), bind_address.ip());
    assert_ne!(listening.port(), 0, "ephemeral port should be resolved");
}

#[rstest]
#[actix_rt::test]
async fn app_routes_login_and_probes(
    health_state: web::Data<HealthState>,
    controller: Arc<LoginController>,
) {
    health_state.mark_bound(SocketAddr::from(([127, 0, 0, 1], 8080)));
    let app = test::init_service(build_app(
        health_state,
        web::Data::new(HttpState::new(controller)),
    ))
    .await;

    let login = test::TestRequest::post()
        .uri("/api/v1/login")
        .set_json(json!({ "email": "admin@example.com", "password": "password" }))
        .to_request();
    let res = test::call_service(&app, login).await;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.headers().contains_key("trace-id"));

    for probe in ["/health/ready", "/health/live"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(probe).to_request()).await;
        assert_eq!(res.status(), StatusCode::OK, "{probe}");
    }
}
