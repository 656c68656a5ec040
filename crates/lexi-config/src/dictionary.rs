use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://api.shecodes.io/dictionary/v1/define".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Definition service URL, queried with `?word=..&key=..`
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
        }
    }
}
