use std::path::PathBuf;

use clap::Parser;
use lexi_config::Config;

#[derive(Parser, Debug)]
#[command(name = "lexi")]
#[command(about = "Look up word definitions, pronunciation and related images", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Word to look up; starts an interactive prompt when omitted
    pub word: Vec<String>,

    /// JSON config file (defaults to ./lexi.json when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write a default config file to this path and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,

    /// Also search for related images
    #[arg(long, overrides_with = "no_images")]
    pub images: bool,

    #[arg(long, overrides_with = "images")]
    pub no_images: bool,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Print the lookup state as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub no_color: bool,

    #[arg(long, value_parser = ["error", "warn", "info", "debug", "trace"], default_value = "warn")]
    pub log_level: String,

    #[arg(long, value_parser = ["plain", "json"], default_value = "plain")]
    pub log_format: String,
}

impl Cli {
    /// The word to look up, if any, with multiple arguments joined by spaces
    pub fn word(&self) -> Option<String> {
        (!self.word.is_empty()).then(|| self.word.join(" "))
    }

    /// Flags override file and environment settings
    pub fn apply(&self, config: &mut Config) {
        if self.images {
            config.images.enabled = true;
        }
        if self.no_images {
            config.images.enabled = false;
        }
        if let Some(timeout) = self.timeout {
            config.network.timeout_seconds = timeout;
        }
        if self.no_color {
            config.ui.color = false;
        }
    }
}
