//! Configuration resolution
//!
//! Resolves the toolchain knobs from multiple sources with priority:
//! 1. Command-line flags (passed as parameters)
//! 2. Environment variables
//! 3. Global config (~/.config/toolenv/config.toml)
//! 4. Defaults

mod discovery;
mod types;

pub use discovery::{ConfigError, ConfigOverrides, global_config_path, resolve_config};
pub use types::{Config, ToolchainConfig};
