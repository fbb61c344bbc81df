// settings.rs - Optional JSON configuration for the viewer

use std::{env, fs, path::Path};

use anyhow::{Context, Result};
use gray_scott::SimConfig;
use log::{error, info};

/// Environment variable naming a JSON `SimConfig` file.
pub const CONFIG_ENV: &str = "GRAY_SCOTT_CONFIG";

/// Reads the file named by `GRAY_SCOTT_CONFIG`, falling back to defaults if it is unset
/// or unusable.
pub fn load_config() -> SimConfig {
    let Some(path) = env::var_os(CONFIG_ENV) else {
        return SimConfig::default();
    };
    let path = Path::new(&path);
    match read_config(path) {
        Ok(config) => {
            info!("loaded configuration from {}", path.display());
            config
        }
        Err(err) => {
            error!("{err:#}; using defaults");
            SimConfig::default()
        }
    }
}

pub fn read_config(path: &Path) -> Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("could not parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}
