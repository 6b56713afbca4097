//! Configuration types

use serde::{Deserialize, Serialize};

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Toolchain variable names and layout
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

/// Names of the settings and variables that get special treatment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    /// Single-directory toolchain root, validated to exist
    pub root_variable: String,
    /// Separator-joined workspace directories, each validated to exist
    pub workspace_variable: String,
    /// Setting holding executable search directories
    pub path_setting: String,
    /// Setting that enables debug diagnostics
    pub debug_setting: String,
    /// Subdirectory of the root that holds executables
    pub bin_dir: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            root_variable: "GOROOT".to_string(),
            workspace_variable: "GOPATH".to_string(),
            path_setting: "PATH".to_string(),
            debug_setting: "debug".to_string(),
            bin_dir: "bin".to_string(),
        }
    }
}

impl ToolchainConfig {
    /// Whether `name` is one of the variables validated against the disk
    pub fn is_known_variable(&self, name: &str) -> bool {
        name == self.root_variable || name == self.workspace_variable
    }
}
