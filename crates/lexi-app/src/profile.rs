use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use lexi_config::Config;

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "lexi.json";

/// Load the config file (explicit path, else `./lexi.json` if present, else
/// defaults), then apply `LEXI_*` environment overrides
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    let path = match path {
        Some(path) => path,
        None if default_path.exists() => default_path,
        None => {
            tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            return Ok(Config::new());
        }
    };

    let mut config = read_config(path)?;
    config.apply_env();
    Ok(config)
}

fn read_config(path: &Path) -> anyhow::Result<Config> {
    tracing::info!("Loading config from {}", path.display());
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("Invalid config in {}", path.display()))
}

/// Write the default config to `path`, refusing to overwrite
pub fn init_config(path: &Path) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(&Config::default())?)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(())
}
