//! Liveness and readiness probes.
//!
//! Liveness needs no state: a process that can answer is alive. Readiness
//! flips once the listener has bound, and reports the address it bound to
//! so an ephemeral port (`:0`) can be discovered by callers.

use std::net::SocketAddr;
use std::sync::OnceLock;

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;

/// Records the address the HTTP listener bound to.
#[derive(Debug, Default)]
pub struct HealthState {
    listening: OnceLock<SocketAddr>,
}

impl HealthState {
    /// State for a server that has not bound yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the bound address. Later calls keep the first address.
    pub fn mark_bound(&self, addr: SocketAddr) {
        self.listening.get_or_init(|| addr);
    }

    /// Address the listener bound to, once it has.
    pub fn listening(&self) -> Option<SocketAddr> {
        self.listening.get().copied()
    }

    /// True once the listener has bound.
    pub fn is_ready(&self) -> bool {
        self.listening.get().is_some()
    }
}

#[derive(Debug, Serialize)]
struct ProbeReport {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    listening: Option<SocketAddr>,
}

fn no_store(mut response: actix_web::HttpResponseBuilder, report: &ProbeReport) -> HttpResponse {
    response
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(report)
}

/// Readiness: 200 `{"status":"ready","listening":..}` once bound, 503 before.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Listener bound; reports its address"),
        (status = 503, description = "Listener not bound yet")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    match state.listening() {
        Some(addr) => no_store(
            HttpResponse::Ok(),
            &ProbeReport {
                status: "ready",
                listening: Some(addr),
            },
        ),
        None => no_store(
            HttpResponse::ServiceUnavailable(),
            &ProbeReport {
                status: "starting",
                listening: None,
            },
        ),
    }
}

/// Liveness: always 200 while the process serves requests.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses((status = 200, description = "Process is serving requests"))
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    no_store(
        HttpResponse::Ok(),
        &ProbeReport {
            status: "alive",
            listening: None,
        },
    )
}
