//! Error types for toolchain resolution

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving settings, executables and subprocess info
#[derive(Error, Debug)]
pub enum ToolchainError {
    /// A parameter that must be text was something else
    #[error("{parameter} must be a string, not {found}")]
    InvalidArgument {
        parameter: &'static str,
        found: &'static str,
    },

    /// An entry point was called outside the UI context
    #[error("toolenv: {operation}() must be called from the UI context")]
    WrongThread { operation: &'static str },

    /// The executable could not be located in any searched directory
    #[error(
        "The executable \"{name}\" could not be located in any of the following locations: \"{}\"",
        .dirs.join("\", \"")
    )]
    ExecutableNotFound { name: String, dirs: Vec<String> },

    /// One or more required environment variables ended up unset
    #[error(
        "The following environment variable{} currently unset: {}",
        plural_is_are(.missing),
        .missing.join(", ")
    )]
    RequiredVariableMissing { missing: Vec<String> },

    /// The toolchain root directory does not exist
    #[error(
        "The {variable} environment variable value \"{}\" does not exist on the filesystem",
        .directory.display()
    )]
    RootNotFound { variable: String, directory: PathBuf },

    /// One or more toolchain workspace directories do not exist
    #[error("The {variable} environment variable {}", workspace_suffix(.directories, .multiple))]
    WorkspaceEntryNotFound {
        variable: String,
        directories: Vec<String>,
        /// Whether the variable listed more than one directory
        multiple: bool,
    },
}

fn plural_is_are(missing: &[String]) -> &'static str {
    if missing.len() > 1 { "s are" } else { " is" }
}

fn workspace_suffix(missing: &[String], multiple: &bool) -> String {
    match missing {
        [only] if !*multiple => format!("value \"{only}\" does not exist on the filesystem"),
        [only] => {
            format!("contains the directory \"{only}\" that does not exist on the filesystem")
        }
        _ => {
            let paths = missing
                .iter()
                .map(|path| format!("\"{path}\""))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "contains {} directories that do not exist on the filesystem: {paths}",
                missing.len()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = ToolchainError::InvalidArgument {
            parameter: "name",
            found: "number",
        };
        assert_eq!(err.to_string(), "name must be a string, not number");
    }

    #[test]
    fn test_executable_not_found_lists_dirs() {
        let err = ToolchainError::ExecutableNotFound {
            name: "go".to_string(),
            dirs: vec!["/usr/local/bin".to_string(), "/bin".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "The executable \"go\" could not be located in any of the following locations: \"/usr/local/bin\", \"/bin\""
        );
    }

    #[test]
    fn test_required_variable_pluralization() {
        let one = ToolchainError::RequiredVariableMissing {
            missing: vec!["GOPATH".to_string()],
        };
        assert_eq!(
            one.to_string(),
            "The following environment variable is currently unset: GOPATH"
        );

        let many = ToolchainError::RequiredVariableMissing {
            missing: vec!["GOPATH".to_string(), "GOROOT".to_string()],
        };
        assert_eq!(
            many.to_string(),
            "The following environment variables are currently unset: GOPATH, GOROOT"
        );
    }

    #[test]
    fn test_root_not_found_message() {
        let err = ToolchainError::RootNotFound {
            variable: "GOROOT".to_string(),
            directory: PathBuf::from("/opt/go"),
        };
        assert_eq!(
            err.to_string(),
            "The GOROOT environment variable value \"/opt/go\" does not exist on the filesystem"
        );
    }

    #[test]
    fn test_workspace_single_value_message() {
        let err = ToolchainError::WorkspaceEntryNotFound {
            variable: "GOPATH".to_string(),
            directories: vec!["/nonexistent".to_string()],
            multiple: false,
        };
        assert_eq!(
            err.to_string(),
            "The GOPATH environment variable value \"/nonexistent\" does not exist on the filesystem"
        );
    }

    #[test]
    fn test_workspace_one_of_many_message() {
        let err = ToolchainError::WorkspaceEntryNotFound {
            variable: "GOPATH".to_string(),
            directories: vec!["/b".to_string()],
            multiple: true,
        };
        assert_eq!(
            err.to_string(),
            "The GOPATH environment variable contains the directory \"/b\" that does not exist on the filesystem"
        );
    }

    #[test]
    fn test_workspace_several_missing_message() {
        let err = ToolchainError::WorkspaceEntryNotFound {
            variable: "GOPATH".to_string(),
            directories: vec!["/a".to_string(), "/b".to_string()],
            multiple: true,
        };
        assert_eq!(
            err.to_string(),
            "The GOPATH environment variable contains 2 directories that do not exist on the filesystem: \"/a\", \"/b\""
        );
    }
}
