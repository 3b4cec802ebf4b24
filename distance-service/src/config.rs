//! Service configuration from environment variables.

use std::net::SocketAddr;

use distance::Environment;

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// HTTP listening port.
    pub port: u16,
    /// Deployment environment (`ENV`).
    pub environment: Environment,
}

impl ServiceConfig {
    /// Load configuration from `PORT` and `ENV`.
    pub fn from_env() -> Self {
        let port = parse_port(std::env::var("PORT").ok().as_deref());

        Self {
            port,
            environment: Environment::from_env(),
        }
    }

    /// Address to bind, on all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: Environment::default(),
        }
    }
}

fn parse_port(value: Option<&str>) -> u16 {
    match value {
        None => DEFAULT_PORT,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = raw, default = DEFAULT_PORT, "Invalid PORT, using default");
            DEFAULT_PORT
        }),
    }
}
