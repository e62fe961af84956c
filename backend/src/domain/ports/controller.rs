//! Driving port for request-handling controllers.
//!
//! Inbound adapters hold an `Arc<dyn Controller>` so handler tests can swap
//! in a double without wiring the capabilities behind it.

use async_trait::async_trait;

use crate::domain::{ControllerRequest, ControllerResponse};

/// A use-case entry point that turns a request envelope into a response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    /// Handle one request. Implementations are total: every failure is
    /// expressed in the returned envelope.
    async fn handle(&self, request: ControllerRequest) -> ControllerResponse;
}
