//! Settings file discovery
//!
//! The command-line host reads its scopes from JSON files. Priority (highest
//! to lowest):
//! 1. Explicit override file (`--settings`)
//! 2. Project file (`.toolenv.json` in the project dir, walking up to the git root)
//! 3. Global settings (`~/.config/toolenv/settings.json`)

use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use super::SettingsProvider;
use super::scope::SettingsScope;

/// Label of the explicit override scope
pub const OVERRIDE_LABEL: &str = "settings override";
/// Label of the project scope
pub const PROJECT_LABEL: &str = "project file";
/// Label of the global scope
pub const GLOBAL_SETTINGS_LABEL: &str = "toolenv settings";

const PROJECT_FILE_NAME: &str = ".toolenv.json";

/// Settings read from disk on every call
#[derive(Debug, Clone)]
pub struct FileSettings {
    override_path: Option<PathBuf>,
    project_dir: PathBuf,
    global_path: PathBuf,
}

impl FileSettings {
    /// Create a provider rooted at `project_dir`, with global settings under
    /// `home_dir`.
    pub fn new(project_dir: &Path, home_dir: &Path) -> Self {
        Self {
            override_path: None,
            project_dir: project_dir.to_path_buf(),
            global_path: global_settings_path(home_dir),
        }
    }

    /// Add an explicit highest-priority settings file
    pub fn with_override(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_path = Some(path.into());
        self
    }

    /// The explicit override file, if any
    pub fn override_path(&self) -> Option<&Path> {
        self.override_path.as_deref()
    }

    /// The project file that would be read, if one exists
    pub fn project_path(&self) -> Option<PathBuf> {
        find_project_file(&self.project_dir)
    }

    /// The global settings file location
    pub fn global_path(&self) -> &Path {
        &self.global_path
    }
}

impl SettingsProvider for FileSettings {
    fn scopes(&self) -> Vec<SettingsScope> {
        let mut scopes = Vec::new();

        if let Some(path) = &self.override_path
            && let Some(scope) = load_scope(path, OVERRIDE_LABEL)
        {
            scopes.push(scope);
        }

        if let Some(path) = self.project_path()
            && let Some(scope) = load_scope(&path, PROJECT_LABEL)
        {
            scopes.push(scope);
        }

        if let Some(scope) = load_scope(&self.global_path, GLOBAL_SETTINGS_LABEL) {
            scopes.push(scope);
        }

        scopes
    }
}

/// Location of the global settings file
pub(crate) fn global_settings_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/toolenv/settings.json")
}

/// Find the project settings file
///
/// Searches the directory and its parents, stopping at the git root.
fn find_project_file(start: &Path) -> Option<PathBuf> {
    let mut dir = start;

    loop {
        let candidate = dir.join(PROJECT_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        if dir.join(".git").exists() {
            break;
        }

        dir = dir.parent()?;
    }

    None
}

/// Load one settings file as a scope.
///
/// Missing files are skipped silently; unreadable or malformed files are
/// logged and skipped.
fn load_scope(path: &Path, label: &str) -> Option<SettingsScope> {
    if !path.exists() {
        debug!("Settings file {path:?} not found");
        return None;
    }

    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            warn!("Failed to read settings file {path:?}: {e}");
            return None;
        }
    };

    let value: Value = match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(e) => {
            warn!("Failed to parse settings file {path:?}: {e}");
            return None;
        }
    };

    let scope = SettingsScope::from_value(value, label);
    if scope.is_none() {
        warn!("Settings file {path:?} does not contain a JSON object");
    }
    scope
}
