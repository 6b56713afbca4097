//! Platform detection

use serde::{Deserialize, Serialize};

/// Operating system platform
///
/// Computed once at startup and passed by value into the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS (Darwin)
    Osx,
    /// Linux and other Unix-like systems
    Linux,
    /// Windows
    Windows,
}

impl Platform {
    /// Detect the current platform
    pub fn detect() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::Osx,
            "windows" => Platform::Windows,
            // BSDs and other Unix-likes share the Linux settings map
            _ => Platform::Linux,
        }
    }

    /// Key of the per-platform override map inside a settings scope
    pub fn settings_key(self) -> &'static str {
        match self {
            Platform::Osx => "osx",
            Platform::Linux => "linux",
            Platform::Windows => "windows",
        }
    }

    /// Filename suffix appended to executable names
    pub fn executable_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::Osx | Platform::Linux => "",
        }
    }

    /// Separator between entries of PATH-like lists
    pub fn path_list_separator(self) -> char {
        match self {
            Platform::Windows => ';',
            Platform::Osx | Platform::Linux => ':',
        }
    }

    /// Split a PATH-like list on the platform separator.
    ///
    /// Splitting is literal: empty segments are kept and no quoting rules
    /// apply.
    pub fn split_path_list(self, value: &str) -> Vec<String> {
        value
            .split(self.path_list_separator())
            .map(str::to_string)
            .collect()
    }

    /// Join directories into a PATH-like list
    pub fn join_path_list<S: AsRef<str>>(self, dirs: &[S]) -> String {
        let sep = self.path_list_separator().to_string();
        dirs.iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(&sep)
    }
}
