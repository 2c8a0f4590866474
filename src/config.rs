//! Server configuration

use serde::Deserialize;

/// Fixed listen address of the HTTP API
pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Largest request body the API will read (16 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Upper bound on runtime worker threads
const MAX_WORKER_THREADS: usize = 16;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub addr: String,

    /// Number of tokio worker threads
    pub worker_threads: usize,

    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,

    /// Whether to start with the default items
    pub seed: bool,

    /// Request bodies above this size are rejected as invalid payloads
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            addr: DEFAULT_ADDR.to_string(),
            worker_threads: num_cpus::get().clamp(1, MAX_WORKER_THREADS),
            log_level: "info".to_string(),
            seed: true,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert!((1..=MAX_WORKER_THREADS).contains(&config.worker_threads));
        assert!(config.seed);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    }

    #[test]
    fn test_partial_deserialize() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"addr":"0.0.0.0:9000","seed":false}"#).unwrap();

        assert_eq!(config.addr, "0.0.0.0:9000");
        assert!(!config.seed);
        assert_eq!(config.log_level, "info");
    }
}
