use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Knobs for iterative resolution.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Where every resolution starts. a.root-servers.net by default.
    #[serde(default = "default_root_server")]
    pub root_server: String,

    /// Port paired with glue and NS-derived addresses.
    #[serde(default = "default_nameserver_port")]
    pub nameserver_port: u16,

    /// Read deadline for each individual query, in milliseconds.
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Queries allowed within one resolution before giving up.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,

    /// Nesting allowed when a nameserver's own address must be resolved.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl ResolverConfig {
    pub fn root_server_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.root_server.parse().map_err(|e| {
            ConfigError::Validation(format!(
                "Invalid root server address '{}': {}",
                self.root_server, e
            ))
        })
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            root_server: default_root_server(),
            nameserver_port: default_nameserver_port(),
            query_timeout_ms: default_query_timeout_ms(),
            max_iterations: default_max_iterations(),
            max_depth: default_max_depth(),
        }
    }
}

fn default_root_server() -> String {
    "198.41.0.4:53".to_string()
}

fn default_nameserver_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_max_iterations() -> usize {
    32
}

fn default_max_depth() -> usize {
    8
}
