//! JSON request boundary
//!
//! Editor hosts talk to the resolver over a data-interchange channel, so
//! request parameters arrive as untyped JSON. Parameters that must be text
//! are checked here and rejected with [`ToolchainError::InvalidArgument`].
//!
//! ```json
//! {"op": "setting_value", "name": "GOPATH"}
//! {"op": "executable_path", "name": "go"}
//! {"op": "subprocess_info", "executable": "go", "required": ["GOPATH"], "optional": ["GOOS"]}
//! ```

use serde_json::{Value, json};

use crate::diagnostics::type_name;
use crate::error::ToolchainError;
use crate::toolchain::Toolchain;

static NULL: Value = Value::Null;

/// A validated request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    SettingValue {
        name: String,
    },
    ExecutablePath {
        name: String,
    },
    SubprocessInfo {
        executable: String,
        required: Vec<String>,
        optional: Vec<String>,
    },
}

impl Request {
    /// Parse and validate a request object
    pub fn from_json(value: &Value) -> Result<Self, ToolchainError> {
        let op = require_text("op", value.get("op").unwrap_or(&NULL))?;
        match op {
            "setting_value" => Ok(Request::SettingValue {
                name: require_param(value, "name")?,
            }),
            "executable_path" => Ok(Request::ExecutablePath {
                name: require_param(value, "name")?,
            }),
            "subprocess_info" => Ok(Request::SubprocessInfo {
                executable: require_param(value, "executable")?,
                required: require_text_list("required", value.get("required"))?,
                optional: require_text_list("optional", value.get("optional"))?,
            }),
            _ => Err(ToolchainError::InvalidArgument {
                parameter: "op",
                found: "unknown operation",
            }),
        }
    }

    /// Run the request and render the response
    pub fn execute(&self, toolchain: &Toolchain<'_>) -> Result<Value, ToolchainError> {
        match self {
            Request::SettingValue { name } => {
                let found = toolchain.setting_value(name)?;
                Ok(match found {
                    Some(found) => json!({"value": found.value, "source": found.source}),
                    None => json!({"value": null, "source": null}),
                })
            }
            Request::ExecutablePath { name } => {
                let found = toolchain.executable_path(name)?;
                Ok(match found {
                    Some(found) => json!({
                        "path": found.value.display().to_string(),
                        "source": found.source,
                    }),
                    None => json!({"path": null, "source": null}),
                })
            }
            Request::SubprocessInfo {
                executable,
                required,
                optional,
            } => {
                let info =
                    toolchain.subprocess_info(executable, required.as_slice(), optional.as_slice())?;
                Ok(json!({
                    "path": info.executable.display().to_string(),
                    "env": info.environment,
                }))
            }
        }
    }
}

/// Require a JSON value to be a string
pub fn require_text<'v>(parameter: &'static str, value: &'v Value) -> Result<&'v str, ToolchainError> {
    value.as_str().ok_or(ToolchainError::InvalidArgument {
        parameter,
        found: type_name(value),
    })
}

fn require_param(request: &Value, parameter: &'static str) -> Result<String, ToolchainError> {
    let value = request.get(parameter).unwrap_or(&NULL);
    require_text(parameter, value).map(str::to_string)
}

/// A missing or null list is empty; anything else must be an array of strings
fn require_text_list(
    parameter: &'static str,
    value: Option<&Value>,
) -> Result<Vec<String>, ToolchainError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| require_text(parameter, item).map(str::to_string))
            .collect(),
        Some(other) => Err(ToolchainError::InvalidArgument {
            parameter,
            found: type_name(other),
        }),
    }
}
