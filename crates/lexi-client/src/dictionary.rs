use async_trait::async_trait;
use lexi_config::dictionary::DictionaryConfig;
use lexi_config::network::NetworkConfig;
use lexi_core::{DefinitionService, TransportFailure};

use crate::{build_client, read_json, transport_failure};

/// Definition service reached over HTTP with `?word=..&key=..`
#[derive(Clone)]
pub struct HttpDictionary {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl HttpDictionary {
    pub fn new(config: &DictionaryConfig, network: &NetworkConfig) -> Self {
        Self {
            client: build_client(network.request_timeout()),
            api_key: config.api_key.clone(),
            api_url: config.endpoint.clone(),
        }
    }
}

#[async_trait]
impl DefinitionService for HttpDictionary {
    async fn define(&self, word: &str) -> Result<serde_json::Value, TransportFailure> {
        tracing::debug!("GET {} word={}", self.api_url, word);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[("word", word), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(transport_failure)?;

        read_json(response).await
    }
}
