//! Subprocess invocation descriptors

use std::path::Path;

use super::{SubprocessInfo, Toolchain};
use crate::error::ToolchainError;

impl Toolchain<'_> {
    /// Gather the executable path and environment needed to run `executable`.
    ///
    /// The environment starts as a copy of the provider's environment. Each
    /// required variable, then each optional variable, is resolved with
    /// [`setting_value`](Self::setting_value): a value overwrites the
    /// inherited entry, no value removes it.
    ///
    /// If the toolchain root variable ends up set and the executable was found
    /// somewhere other than `<root>/<bin_dir>/<executable>`, a warning is
    /// written to the diagnostics sink. The comparison is a literal path
    /// comparison without normalization.
    ///
    /// # Errors
    ///
    /// - [`ToolchainError::WrongThread`] outside the UI context
    /// - [`ToolchainError::ExecutableNotFound`] if the executable is missing
    /// - [`ToolchainError::RootNotFound`] / [`ToolchainError::WorkspaceEntryNotFound`]
    ///   from variable validation
    /// - [`ToolchainError::RequiredVariableMissing`] if a required variable ends up unset
    pub fn subprocess_info<S: AsRef<str>>(
        &self,
        executable: &str,
        required_vars: &[S],
        optional_vars: &[S],
    ) -> Result<SubprocessInfo, ToolchainError> {
        self.context.ensure_ui("subprocess_info")?;
        let scopes = self.scopes();

        let Some(found) = self.executable_path_in(executable, &scopes) else {
            return Err(ToolchainError::ExecutableNotFound {
                name: self.suffixed(executable),
                dirs: self.searched_dirs(&scopes),
            });
        };
        let path = found.value;

        let mut env = self.provider.environment();
        for name in required_vars.iter().chain(optional_vars).map(AsRef::as_ref) {
            match self.setting_value_in(name, &scopes)? {
                Some(value) => {
                    env.insert(name.to_string(), value.text());
                }
                None => {
                    env.remove(name);
                }
            }
        }

        let mut missing: Vec<String> = required_vars
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !env.contains_key(*name))
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            missing.sort_by_key(|name| name.to_lowercase());
            return Err(ToolchainError::RequiredVariableMissing { missing });
        }

        let root_variable = &self.config.root_variable;
        if let Some(root) = env.get(root_variable) {
            let expected = Path::new(root)
                .join(&self.config.bin_dir)
                .join(self.suffixed(executable));
            if expected.as_os_str() != path.as_os_str() {
                self.warn(&format!(
                    "binary {executable} was found at \"{}\", which is not inside of the {root_variable} \"{root}\"",
                    path.display()
                ));
            }
        }

        Ok(SubprocessInfo {
            executable: path,
            environment: env,
        })
    }
}
