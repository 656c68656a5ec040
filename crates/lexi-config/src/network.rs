use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    10
}

fn default_probe_timeout_ms() -> u64 {
    1500
}

/// Shortest probe that can still complete a TCP handshake
const MIN_PROBE_TIMEOUT_MS: u64 = 100;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    /// Ceiling for each service call
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    /// Ceiling for the connectivity probe
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,
    /// `host:port` to probe for connectivity, defaults to the dictionary host
    #[serde(default)]
    pub probe_address: Option<String>,
}

impl NetworkConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms.max(MIN_PROBE_TIMEOUT_MS))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            probe_timeout_ms: default_probe_timeout_ms(),
            probe_address: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeouts_are_clamped() {
        let config = NetworkConfig {
            timeout_seconds: 0,
            probe_timeout_ms: 0,
            probe_address: None,
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(1));
        assert_eq!(
            config.probe_timeout(),
            Duration::from_millis(MIN_PROBE_TIMEOUT_MS)
        );
    }

    #[test]
    fn configured_timeouts_above_floor_are_kept() {
        let config = NetworkConfig::default();
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
        assert_eq!(config.probe_timeout(), Duration::from_millis(1500));
    }
}
