//! Configuration discovery and resolution

use super::types::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error in {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Command-line overrides for configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    /// Override the toolchain root variable name
    pub root_variable: Option<String>,
    /// Override the workspace list variable name
    pub workspace_variable: Option<String>,
    /// Path to config file override
    pub config_path: Option<PathBuf>,
}

/// Location of the global config file
pub fn global_config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/toolenv/config.toml")
}

/// Resolve configuration from all sources
///
/// Priority (highest to lowest):
/// 1. Command-line overrides
/// 2. Environment variables (`TOOLENV_ROOT_VARIABLE`, `TOOLENV_WORKSPACE_VARIABLE`)
/// 3. Config file (explicit `config_path`, else ~/.config/toolenv/config.toml)
/// 4. Defaults
///
/// An explicit config file must be readable and valid; a broken global file
/// is logged and ignored.
pub fn resolve_config(overrides: &ConfigOverrides, home_dir: &Path) -> Result<Config, ConfigError> {
    let mut config = match &overrides.config_path {
        Some(path) => load_config_file(path)?,
        None => {
            let global_path = global_config_path(home_dir);
            if global_path.exists() {
                load_config_file(&global_path).unwrap_or_else(|e| {
                    warn!("Failed to load global config: {e}");
                    Config::default()
                })
            } else {
                Config::default()
            }
        }
    };

    apply_env_overrides(&mut config);
    apply_cli_overrides(&mut config, overrides);

    Ok(config)
}

/// Load config from a TOML file
fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&contents).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply environment variable overrides
///
/// Empty values are treated as not set.
fn apply_env_overrides(config: &mut Config) {
    if let Ok(v) = std::env::var("TOOLENV_ROOT_VARIABLE")
        && !v.is_empty()
    {
        config.toolchain.root_variable = v;
    }
    if let Ok(v) = std::env::var("TOOLENV_WORKSPACE_VARIABLE")
        && !v.is_empty()
    {
        config.toolchain.workspace_variable = v;
    }
}

/// Apply command-line overrides
fn apply_cli_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(ref root) = overrides.root_variable {
        config.toolchain.root_variable = root.clone();
    }
    if let Some(ref workspace) = overrides.workspace_variable {
        config.toolchain.workspace_variable = workspace.clone();
    }
}
