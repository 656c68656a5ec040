use lexi_types::ImageResult;
use serde_json::Value;

use crate::error::TransportFailure;

/// Definition lookup provider interface
#[async_trait::async_trait]
pub trait DefinitionService: Send + Sync {
    /// Fetch the raw definition payload for `word`
    async fn define(&self, word: &str) -> Result<Value, TransportFailure>;
}

/// Image search provider interface
#[async_trait::async_trait]
pub trait ImageService: Send + Sync {
    async fn search(&self, query: &str) -> Result<Vec<ImageResult>, TransportFailure>;
}

/// Reports whether the client currently has network connectivity
#[async_trait::async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_online(&self) -> bool;
}
