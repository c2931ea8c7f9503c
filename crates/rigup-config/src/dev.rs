//! Development server specification.
//!
//! Pure declaration; the engine owns the server process. Present in both
//! modes, consulted only in development.

use serde::{Deserialize, Serialize};

use crate::environment::HostAddress;

/// Default dev-server port.
pub const DEFAULT_PORT: u16 = 8888;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerSpec {
    /// Host to bind: a discovered wireless address or `localhost`.
    pub host: String,

    pub port: u16,

    /// Hot reload: push updates into the running page without a full reload.
    pub hot: bool,

    /// Open a browser tab once the server is up.
    pub open: bool,

    /// Serve the index for unknown routes (SPA history routing). Off here.
    pub history_api_fallback: bool,
}

impl DevServerSpec {
    pub fn with_host(host: HostAddress) -> Self {
        Self {
            host: host.as_host(),
            ..Self::default()
        }
    }
}

impl Default for DevServerSpec {
    fn default() -> Self {
        Self {
            host: HostAddress::Loopback.as_host(),
            port: DEFAULT_PORT,
            hot: true,
            open: true,
            history_api_fallback: false,
        }
    }
}
