//! Server configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Port used when none is configured.
pub const DEFAULT_PORT: u16 = 11076;

/// Settings fixed at startup and handed to the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Directory holding the `<suite>.json` files.
    pub content_dir: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(content_dir: impl Into<PathBuf>) -> Self {
        Self {
            content_dir: content_dir.into(),
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_all_interfaces_on_default_port() {
        let config = ServerConfig::new("content");
        assert_eq!(config.socket_addr(), "0.0.0.0:11076".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn builder_overrides_address() {
        let config = ServerConfig::new("content")
            .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .with_port(8080);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
    }
}
