//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use login_gateway::domain::ports::Controller;

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) login: Arc<dyn Controller>,
}

impl ServerConfig {
    /// Bind `login` to `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, login: Arc<dyn Controller>) -> Self {
        Self { bind_addr, login }
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Read by server tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
