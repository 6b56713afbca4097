//! Request command implementation
//!
//! Reads one JSON request from stdin and writes one JSON response to stdout.
//! Resolution failures are reported in the response as `{"error": "..."}`
//! rather than through the exit status, so hosts only need to parse stdout.

use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{Value, json};
use toolenv_core::request::Request;

use super::Session;

/// Answer a JSON request
#[derive(Args, Debug)]
pub struct RequestArgs {
    /// Pretty-print the response
    #[arg(long)]
    pretty: bool,
}

/// Execute the request command
pub fn execute(args: RequestArgs, session: &Session) -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read request from stdin")?;
    let value: Value = serde_json::from_str(&input).context("Request is not valid JSON")?;

    let response = match Request::from_json(&value).and_then(|r| r.execute(&session.toolchain())) {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!("request failed: {e}");
            json!({"error": e.to_string()})
        }
    };

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", serde_json::to_string(&response)?);
    }

    Ok(())
}
