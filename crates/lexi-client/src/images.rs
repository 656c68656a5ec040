use async_trait::async_trait;
use lexi_config::images::ImagesConfig;
use lexi_config::network::NetworkConfig;
use lexi_core::{ImageService, TransportFailure, parse_images};
use lexi_types::ImageResult;

use crate::{build_client, read_json, transport_failure};

/// Image search reached over HTTP with `?query=..`, authenticated by header
#[derive(Clone)]
pub struct HttpImageSearch {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    auth_header: String,
    per_page: u32,
}

impl HttpImageSearch {
    pub fn new(config: &ImagesConfig, network: &NetworkConfig) -> Self {
        Self {
            client: build_client(network.request_timeout()),
            api_key: config.api_key.clone(),
            api_url: config.endpoint.clone(),
            auth_header: config.auth_header.clone(),
            per_page: config.per_page.max(1),
        }
    }
}

#[async_trait]
impl ImageService for HttpImageSearch {
    async fn search(&self, query: &str) -> Result<Vec<ImageResult>, TransportFailure> {
        if self.api_key.is_empty() {
            return Err(TransportFailure::Status(401));
        }

        tracing::debug!("GET {} query={}", self.api_url, query);

        let per_page = self.per_page.to_string();
        let response = self
            .client
            .get(&self.api_url)
            .header(self.auth_header.as_str(), self.api_key.as_str())
            .query(&[("query", query), ("per_page", per_page.as_str())])
            .send()
            .await
            .map_err(transport_failure)?;

        let json = read_json(response).await?;
        parse_images(&json, self.per_page as usize)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lexi_config::network::NetworkConfig;

    use super::*;
    use crate::stub::{self, StubServer};

    fn images(base_url: &str, api_key: &str) -> HttpImageSearch {
        let config = ImagesConfig {
            enabled: true,
            endpoint: format!("{base_url}/v1/search"),
            api_key: api_key.to_string(),
            auth_header: "X-Api-Key".to_string(),
            per_page: 2,
        };
        let mut search = HttpImageSearch::new(&config, &NetworkConfig::default());
        search.client = stub::client(Duration::from_secs(2));
        search
    }

    #[tokio::test]
    async fn sends_query_page_size_and_auth_header() {
        let body = r#"{ "photos": [
            { "id": 1, "alt": "orange sky", "src": { "landscape": "https://img/1-l.jpg", "original": "https://img/1.jpg" } },
            { "id": 2, "src": { "tiny": "https://img/2-t.jpg", "large": "https://img/2-xl.jpg" } },
            { "id": 3, "src": { "landscape": "https://img/3-l.jpg", "original": "https://img/3.jpg" } }
        ] }"#;
        let server = StubServer::reply("200 OK", body).await;
        let search = images(&server.base_url, "img-key");

        let found = search.search("sunset").await.unwrap();
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].id, "1");
        assert_eq!(found[0].full_url, "https://img/1.jpg");
        assert_eq!(found[0].alt_text.as_deref(), Some("orange sky"));
        assert_eq!(found[1].thumbnail_url, "https://img/2-t.jpg");

        let request = server.request().await;
        assert!(
            request.starts_with("get /v1/search?query=sunset&per_page=2 http/1.1\r\n"),
            "{request}"
        );
        assert!(request.contains("\r\nx-api-key: img-key\r\n"), "{request}");
    }

    #[tokio::test]
    async fn rejected_key_is_status() {
        let server = StubServer::reply("401 Unauthorized", r#"{ "error": "bad key" }"#).await;
        let search = images(&server.base_url, "img-key");

        assert_eq!(
            search.search("sunset").await,
            Err(TransportFailure::Status(401))
        );
    }

    #[tokio::test]
    async fn unrecognized_payload_is_malformed() {
        let server = StubServer::reply("200 OK", r#"{ "total": 0 }"#).await;
        let search = images(&server.base_url, "img-key");

        assert!(matches!(
            search.search("sunset").await,
            Err(TransportFailure::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn missing_key_fails_without_request() {
        let search = images("http://127.0.0.1:9", "");
        assert_eq!(
            search.search("sunset").await,
            Err(TransportFailure::Status(401))
        );
    }
}
