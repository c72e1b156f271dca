mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    let default_paths = ["./tankobon.toml", "~/.config/tankobon/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let mut names = HashSet::new();
    for library in &config.libraries {
        let name = library.name.trim();
        if name.is_empty() {
            anyhow::bail!("Library with root {:?} has no name", library.root);
        }
        if !names.insert(name.to_lowercase()) {
            anyhow::bail!("Duplicate library name: '{}'", name);
        }
        if !library.root.exists() {
            tracing::warn!("Library root does not exist: {:?}", library.root);
        }
    }

    Ok(())
}
