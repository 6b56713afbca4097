//! Which command implementation

use anyhow::{Result, bail};
use clap::Args;
use serde_json::json;

use super::Session;

/// Locate an executable
#[derive(Args, Debug)]
pub struct WhichArgs {
    /// Executable name without platform suffix (e.g. go)
    executable: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the which command
///
/// Fails when the executable cannot be found so scripts can test the exit
/// status.
pub fn execute(args: WhichArgs, session: &Session) -> Result<()> {
    let Some(found) = session.toolchain().executable_path(&args.executable)? else {
        bail!("executable {} not found", args.executable);
    };

    if args.json {
        let output = json!({
            "path": found.value.display().to_string(),
            "source": found.source,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let path = found.value.display();
        let source = &found.source;
        println!("{path} (from {source})");
    }

    Ok(())
}
