//! Env command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::Session;

/// Show how to spawn an executable
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Executable name without platform suffix (e.g. go)
    executable: String,

    /// Variable that must be present in the environment (repeatable)
    #[arg(long, value_name = "VAR")]
    pub(super) require: Vec<String>,

    /// Variable to apply from settings when set (repeatable)
    #[arg(long, value_name = "VAR")]
    pub(super) optional: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the env command
pub fn execute(args: EnvArgs, session: &Session) -> Result<()> {
    let info = session.toolchain().subprocess_info(
        &args.executable,
        args.require.as_slice(),
        args.optional.as_slice(),
    )?;

    if args.json {
        let output = json!({
            "path": info.executable.display().to_string(),
            "env": info.environment,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", info.executable.display());
        for (key, value) in &info.environment {
            println!("{key}={value}");
        }
    }

    Ok(())
}
