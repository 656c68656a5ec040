use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::images::ImagesConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod images;
pub mod network;
pub mod ui;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub images: ImagesConfig,
    pub network: NetworkConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Override fields from `LEXI_*` environment variables when set
    pub fn apply_env(&mut self) {
        self.apply_vars(|key| env::var(key).ok());
    }

    fn apply_vars(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(endpoint) = var("LEXI_DICTIONARY_URL") {
            self.dictionary.endpoint = endpoint;
        }
        if let Some(key) = var("LEXI_DICTIONARY_KEY") {
            self.dictionary.api_key = key;
        }
        if let Some(enabled) = var("LEXI_IMAGES_ENABLED").and_then(|v| parse_flag(&v)) {
            self.images.enabled = enabled;
        }
        if let Some(endpoint) = var("LEXI_IMAGES_URL") {
            self.images.endpoint = endpoint;
        }
        if let Some(key) = var("LEXI_IMAGES_KEY") {
            self.images.api_key = key;
        }
        if let Some(seconds) = var("LEXI_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.network.timeout_seconds = seconds;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "y" | "yes" | "true" | "on" => Some(true),
        "0" | "n" | "no" | "false" | "off" => Some(false),
        _ => None,
    }
}
