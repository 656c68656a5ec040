use std::time::Duration;

use async_trait::async_trait;
use lexi_config::Config;
use lexi_core::Connectivity;
use tokio::net::TcpStream;

/// Connectivity check that opens a TCP connection to a known host
#[derive(Clone, Debug)]
pub struct TcpProbe {
    address: Option<String>,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(address: Option<String>, timeout: Duration) -> Self {
        Self { address, timeout }
    }

    /// Probe `network.probe_address`, or the dictionary host when unset
    pub fn from_config(config: &Config) -> Self {
        let address = config
            .network
            .probe_address
            .clone()
            .or_else(|| host_port(&config.dictionary.endpoint));

        Self::new(address, config.network.probe_timeout())
    }
}

fn host_port(endpoint: &str) -> Option<String> {
    let url = reqwest::Url::parse(endpoint).ok()?;
    let host = url.host_str()?;
    let port = url.port_or_known_default()?;
    Some(format!("{host}:{port}"))
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        let Some(address) = &self.address else {
            // Nothing to probe, so never claim to be offline
            return true;
        };

        match tokio::time::timeout(self.timeout, TcpStream::connect(address.as_str())).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::debug!("Connectivity probe to {} failed: {}", address, e);
                false
            }
            Err(_) => {
                tracing::debug!("Connectivity probe to {} timed out", address);
                false
            }
        }
    }
}
