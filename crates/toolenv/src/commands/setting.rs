//! Setting command implementation

use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::Session;

/// Look up a setting
#[derive(Args, Debug)]
pub struct SettingArgs {
    /// Setting name (e.g. GOPATH)
    name: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Execute the setting command
pub fn execute(args: SettingArgs, session: &Session) -> Result<()> {
    let found = session.toolchain().setting_value(&args.name)?;

    if args.json {
        let output = match &found {
            Some(found) => json!({"name": args.name, "value": found.value, "source": found.source}),
            None => json!({"name": args.name, "value": null, "source": null}),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match found {
        Some(found) => {
            let name = &args.name;
            let value = found.text();
            let source = &found.source;
            println!("{name}={value} (from {source})");
        }
        None => println!("{} (not set)", args.name),
    }

    Ok(())
}
