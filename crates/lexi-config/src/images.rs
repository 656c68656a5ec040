use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    false
}

fn default_endpoint() -> String {
    "https://api.pexels.com/v1/search".to_string()
}

fn default_auth_header() -> String {
    "Authorization".to_string()
}

fn default_per_page() -> u32 {
    6
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ImagesConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    /// Header carrying `api_key`
    #[serde(default = "default_auth_header")]
    pub auth_header: String,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

impl ImagesConfig {
    /// Image lookups run only when enabled and a key is configured
    pub fn is_active(&self) -> bool {
        self.enabled && !self.api_key.is_empty()
    }
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            endpoint: default_endpoint(),
            api_key: String::new(),
            auth_header: default_auth_header(),
            per_page: default_per_page(),
        }
    }
}
