//! Executable discovery

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{Sourced, Toolchain};
use crate::diagnostics::type_name;
use crate::error::ToolchainError;
use crate::probe::{Probe, probe_executable};
use crate::settings::{Setting, SettingsScope, resolve};

impl Toolchain<'_> {
    /// Find an executable such as `go` or `gofmt`.
    ///
    /// Directories from the PATH setting are searched first, then the shell's
    /// PATH. The name gets the platform executable suffix. Only regular files
    /// the current user may execute are accepted.
    ///
    /// Returns `Ok(None)` when nothing matched.
    pub fn executable_path(&self, name: &str) -> Result<Option<Sourced<PathBuf>>, ToolchainError> {
        self.context.ensure_ui("executable_path")?;
        let scopes = self.scopes();
        Ok(self.executable_path_in(name, &scopes))
    }

    pub(super) fn executable_path_in(
        &self,
        name: &str,
        scopes: &[SettingsScope],
    ) -> Option<Sourced<PathBuf>> {
        let file_name = self.suffixed(name);
        let path_setting = &self.config.path_setting;

        let resolved = resolve(path_setting, scopes, self.platform);
        match (resolved.setting, resolved.source) {
            (Setting::Value(Value::String(path)), Some(source)) => {
                let dirs = self.platform.split_path_list(&path);
                if let Some(found) = self.search(&dirs, &file_name, &source, &path, scopes) {
                    return Some(found);
                }
                self.debug(scopes, || {
                    format!("binary {name} not found in {path_setting} from {source} - \"{path}\"")
                });
            }
            (Setting::Value(value), Some(source)) => {
                self.debug(scopes, || {
                    format!(
                        "the value for {path_setting} from {source} is not a string, but instead a {}",
                        type_name(&value)
                    )
                });
            }
            _ => {}
        }

        let shell = self.provider.shell();
        let dirs = self.provider.path_dirs();
        let joined = self.platform.join_path_list(&dirs);
        if let Some(found) = self.search(&dirs, &file_name, &shell, &joined, scopes) {
            return Some(found);
        }

        self.debug(scopes, || {
            format!("binary {name} not found in {path_setting} from {shell} - \"{joined}\"")
        });
        None
    }

    /// Probe `<dir>/<file_name>` for each directory in order
    fn search(
        &self,
        dirs: &[String],
        file_name: &str,
        source: &str,
        path_value: &str,
        scopes: &[SettingsScope],
    ) -> Option<Sourced<PathBuf>> {
        dirs.iter().find_map(|dir| {
            let candidate = Path::new(dir).join(file_name);
            match probe_executable(&candidate) {
                Probe::Executable => Some(Sourced {
                    value: candidate,
                    source: source.to_string(),
                }),
                Probe::NotExecutable => {
                    self.debug(scopes, || {
                        format!(
                            "binary {file_name} found in {} from {source} - \"{path_value}\" - is not executable",
                            self.config.path_setting
                        )
                    });
                    None
                }
                Probe::Missing => None,
            }
        })
    }

    /// Directories an executable search looks through, for error reporting.
    ///
    /// PATH setting directories first (deduplicated), then shell PATH
    /// directories not already listed.
    pub(super) fn searched_dirs(&self, scopes: &[SettingsScope]) -> Vec<String> {
        let mut dirs: Vec<String> = Vec::new();

        if let Setting::Value(Value::String(path)) =
            resolve(&self.config.path_setting, scopes, self.platform).setting
            && !path.is_empty()
        {
            for dir in self.platform.split_path_list(&path) {
                if !dirs.contains(&dir) {
                    dirs.push(dir);
                }
            }
        }

        for dir in self.provider.path_dirs() {
            if !dirs.contains(&dir) {
                dirs.push(dir);
            }
        }

        dirs
    }
}
