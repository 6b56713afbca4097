//! Shell environment and PATH providers
//!
//! Login-shell discovery lives outside this crate. The core only needs the
//! shell's identifier, its environment and its PATH directories, which an
//! [`EnvironmentProvider`] supplies.

use std::collections::BTreeMap;

use tracing::debug;

use crate::context::Platform;

/// A process environment block
pub type Environment = BTreeMap<String, String>;

/// Supplier of the inherited environment and PATH fallback data
pub trait EnvironmentProvider {
    /// Identifier of the shell the environment came from, used as a source label
    fn shell(&self) -> String;

    /// The full inherited environment
    fn environment(&self) -> Environment;

    /// PATH directories in search order
    fn path_dirs(&self) -> Vec<String>;
}

/// Environment of the current process
#[derive(Debug, Clone, Copy)]
pub struct ProcessEnvironment {
    platform: Platform,
}

impl ProcessEnvironment {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl Default for ProcessEnvironment {
    fn default() -> Self {
        Self::new(Platform::detect())
    }
}

impl EnvironmentProvider for ProcessEnvironment {
    fn shell(&self) -> String {
        let var = match self.platform {
            Platform::Windows => "COMSPEC",
            Platform::Osx | Platform::Linux => "SHELL",
        };
        std::env::var(var)
            .ok()
            .filter(|shell| !shell.is_empty())
            .unwrap_or_else(|| "environment".to_string())
    }

    fn environment(&self) -> Environment {
        let mut env = Environment::new();
        for (key, value) in std::env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    env.insert(key, value);
                }
                (key, _) => {
                    debug!("Skipping non UTF-8 environment entry {key:?}");
                }
            }
        }
        env
    }

    fn path_dirs(&self) -> Vec<String> {
        let Some(raw) = std::env::var_os("PATH") else {
            return Vec::new();
        };
        match raw.into_string() {
            Ok(path) => self.platform.split_path_list(&path),
            Err(raw) => std::env::split_paths(&raw)
                .filter_map(|dir| match dir.into_os_string().into_string() {
                    Ok(dir) => Some(dir),
                    Err(dir) => {
                        debug!("Skipping non UTF-8 PATH entry {dir:?}");
                        None
                    }
                })
                .collect(),
        }
    }
}

/// In-memory provider with a fixed shell and environment
#[derive(Debug, Clone)]
pub struct StaticEnvironment {
    shell: String,
    env: Environment,
    platform: Platform,
}

impl StaticEnvironment {
    /// Create a provider; PATH directories are derived from the `PATH` entry.
    pub fn new<K, V>(shell: impl Into<String>, env: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            shell: shell.into(),
            env: env.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            platform: Platform::detect(),
        }
    }

    /// Use a specific platform's PATH separator
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

impl EnvironmentProvider for StaticEnvironment {
    fn shell(&self) -> String {
        self.shell.clone()
    }

    fn environment(&self) -> Environment {
        self.env.clone()
    }

    /// Directories from the `PATH` entry; none when there is no entry
    fn path_dirs(&self) -> Vec<String> {
        match self.env.get("PATH") {
            Some(path) => self.platform.split_path_list(path),
            None => Vec::new(),
        }
    }
}
