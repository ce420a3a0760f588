mod config;

pub use config::{Config, UiConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the directory holding `config.toml`.
///
/// `VIBESYNC_HOME` wins when set. Otherwise `~/.config/vibesync[-dev]/`,
/// with the `-dev` suffix when `VIBESYNC_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("VIBESYNC_HOME") {
        Some(home) => PathBuf::from(home),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("VIBESYNC_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("vibesync-dev")
            } else {
                base_dir.join("vibesync")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(|source| ConfigError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}
