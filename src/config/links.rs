//! Uplink (hub) connection configuration.

use serde::Deserialize;

use super::defaults::default_uplink_port;

/// The server we link to.
#[derive(Debug, Clone, Deserialize)]
pub struct UplinkConfig {
    /// Uplink IP/hostname to connect to.
    pub hostname: String,
    /// Uplink server port.
    #[serde(default = "default_uplink_port")]
    pub port: u16,
    /// Link password, sent in plaintext as `PASS :<password>`.
    /// Must match the C:line for our server name on the uplink.
    pub password: String,
}

impl UplinkConfig {
    /// `host:port` for connecting.
    pub fn address(&self) -> String {
        format!("{}:{}", self.hostname, self.port)
    }
}
