//! Named setting lookup with environment fallback

use std::path::Path;

use serde_json::Value;

use super::{Sourced, Toolchain, stringify};
use crate::diagnostics::type_name;
use crate::error::ToolchainError;
use crate::probe::path_exists;
use crate::settings::{Setting, SettingsScope, resolve};

impl Toolchain<'_> {
    /// Look up a setting such as `GOPATH` or `GOROOT`.
    ///
    /// Order: platform overrides of every scope, plain values of every scope,
    /// then the shell environment. An explicit null in a scope means "unset"
    /// and stops the search.
    ///
    /// The toolchain root and workspace variables are checked against the
    /// filesystem and returned as strings.
    ///
    /// # Errors
    ///
    /// - [`ToolchainError::WrongThread`] outside the UI context
    /// - [`ToolchainError::RootNotFound`] if the root directory is missing
    /// - [`ToolchainError::WorkspaceEntryNotFound`] if any workspace directory is missing
    pub fn setting_value(&self, name: &str) -> Result<Option<Sourced<Value>>, ToolchainError> {
        self.context.ensure_ui("setting_value")?;
        let scopes = self.scopes();
        self.setting_value_in(name, &scopes)
    }

    pub(super) fn setting_value_in(
        &self,
        name: &str,
        scopes: &[SettingsScope],
    ) -> Result<Option<Sourced<Value>>, ToolchainError> {
        let resolved = resolve(name, scopes, self.platform);
        let found = match (resolved.setting, resolved.source) {
            (Setting::Value(value), Some(source)) => Some(Sourced { value, source }),
            (Setting::Absent, _) => self.provider.environment().remove(name).map(|value| Sourced {
                value: Value::String(value),
                source: self.provider.shell(),
            }),
            _ => None,
        };

        if !self.config.is_known_variable(name) {
            return Ok(found);
        }
        let Some(found) = found else {
            return Ok(None);
        };

        if !found.value.is_string() {
            self.debug(scopes, || {
                format!(
                    "the value for {name} from {} is not a string, but instead a {}",
                    found.source,
                    type_name(&found.value)
                )
            });
        }
        let text = stringify(&found.value);

        if name == self.config.root_variable {
            if !path_exists(Path::new(&text)) {
                return Err(ToolchainError::RootNotFound {
                    variable: name.to_string(),
                    directory: text.into(),
                });
            }
        } else {
            let entries = self.platform.split_path_list(&text);
            let missing: Vec<String> = entries
                .iter()
                .filter(|entry| !path_exists(Path::new(entry)))
                .cloned()
                .collect();
            if !missing.is_empty() {
                return Err(ToolchainError::WorkspaceEntryNotFound {
                    variable: name.to_string(),
                    directories: missing,
                    multiple: entries.len() > 1,
                });
            }
        }

        Ok(Some(Sourced {
            value: Value::String(text),
            source: found.source,
        }))
    }
}
