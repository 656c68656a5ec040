use serde::{Deserialize, Serialize};

fn default_color() -> bool {
    true
}

fn default_prompt() -> String {
    ">> ".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            prompt: default_prompt(),
        }
    }
}
