//! Server settings loaded via OrthoConfig.
//!
//! Values come from `ROSTER_*` environment variables, command-line flags and
//! an optional configuration file, in OrthoConfig's usual precedence.

use std::ffi::OsString;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";

/// Listener settings for the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ROSTER")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Load settings from the process arguments and environment.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when a source cannot be parsed.
    pub fn load_from_args<I>(args: I) -> std::io::Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString> + Clone,
    {
        Self::load_from_iter(args)
            .map_err(|e| std::io::Error::other(format!("invalid server settings: {e}")))
    }

    /// Configured host, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Configured port; 8080 unless overridden.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolve the bind address.
    ///
    /// # Errors
    /// Returns [`std::io::Error`] when the host is not an IP address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let host = self.host();
        host.parse()
            .map(|ip| SocketAddr::new(ip, self.port()))
            .map_err(|e| std::io::Error::other(format!("invalid bind host {host:?}: {e}")))
    }
}
