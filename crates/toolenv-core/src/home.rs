//! Home directory resolution for toolenv
//!
//! Global settings and config live under `<home>/.config/toolenv/`. The home
//! directory can be redirected with `TOOLENV_HOME`, which integration tests
//! use to isolate themselves from the real user profile.
//!
//! # Precedence
//!
//! 1. `TOOLENV_HOME` environment variable (if set and non-empty)
//! 2. `dirs::home_dir()` platform default

use anyhow::{Context, Result};
use std::path::PathBuf;

/// Get the home directory for toolenv operations
///
/// # Errors
///
/// Returns an error if `TOOLENV_HOME` is not set and the platform home
/// directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("TOOLENV_HOME") {
        let trimmed = home.trim();
        if !trimmed.is_empty() {
            return Ok(PathBuf::from(trimmed));
        }
    }

    dirs::home_dir().context("Could not determine home directory")
}
