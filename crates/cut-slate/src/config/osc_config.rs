use crate::config::{default_host, default_port};

use cut_slate_core::{Endpoint, WireDialect};
use serde::{Deserialize, Serialize};

/// Recorder endpoint and wire encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OscConfig {
    /// Recorder host (IPv4 literal or hostname).
    #[serde(default = "default_host")]
    pub host: String,
    /// Recorder UDP port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Wire dialect understood by the receiver plugin.
    #[serde(default)]
    pub dialect: WireDialect,
}

impl Default for OscConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dialect: WireDialect::default(),
        }
    }
}

impl OscConfig {
    /// Endpoint to send control messages to.
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }
}
