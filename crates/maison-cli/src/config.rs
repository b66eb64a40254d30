//! Command-line and environment configuration.

use std::net::{IpAddr, SocketAddr};

use clap::{Args, Parser};
use maison_server::service::ServiceConfig;

/// Maison storefront and admin API server.
#[derive(Debug, Parser)]
#[command(name = "maison", version, about)]
pub struct Cli {
    /// Service configuration (database, admin key, rate limits).
    #[command(flatten)]
    pub service: ServiceConfig,

    /// HTTP server configuration.
    #[command(flatten)]
    pub server: ServerConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Args)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    #[arg(long = "http-host", env = "MAISON_HTTP_HOST", default_value = "127.0.0.1")]
    pub http_host: IpAddr,

    /// Port the HTTP server binds to.
    #[arg(long = "http-port", env = "MAISON_HTTP_PORT", default_value = "8080")]
    pub http_port: u16,

    /// Trust the rightmost `X-Forwarded-For` hop for client IPs.
    ///
    /// Enable only when the server sits behind a reverse proxy that
    /// sets the header; otherwise clients could spoof their way past
    /// IP rate limits.
    #[arg(long = "trust-forwarded-for", env = "MAISON_TRUST_FORWARDED_FOR")]
    pub trust_forwarded_for: bool,
}

impl ServerConfig {
    /// Returns the socket address to bind.
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http_host, self.http_port)
    }

    /// Returns whether the server binds to all interfaces.
    pub fn binds_to_all_interfaces(&self) -> bool {
        self.http_host.is_unspecified()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_addr_combines_host_and_port() {
        let config = ServerConfig {
            http_host: "0.0.0.0".parse().unwrap(),
            http_port: 9090,
            trust_forwarded_for: false,
        };
        assert_eq!(config.server_addr().to_string(), "0.0.0.0:9090");
        assert!(config.binds_to_all_interfaces());
    }
}
