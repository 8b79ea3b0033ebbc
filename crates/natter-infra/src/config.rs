//! Configuration loader for Natter.
//!
//! Reads `config.toml` from the data directory (`~/.natter/` in
//! production) and deserializes it into [`NatterConfig`]. Falls back to
//! the built-in defaults when the file is missing or malformed, so a
//! fresh install chats against a local backend with zero setup.

use std::path::{Path, PathBuf};

use natter_types::config::NatterConfig;

/// Resolve the Natter data directory.
///
/// Priority:
/// 1. `NATTER_DATA_DIR` environment variable
/// 2. `~/.natter`
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("NATTER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".natter");
    }

    // Last resort: current directory
    PathBuf::from(".natter")
}

/// Load configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`NatterConfig::default()`]
///   (a single `local` profile).
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_config(data_dir: &Path) -> NatterConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(
                "No config.toml found at {}, using defaults",
                config_path.display()
            );
            return NatterConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return NatterConfig::default();
        }
    };

    match toml::from_str::<NatterConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            NatterConfig::default()
        }
    }
}
