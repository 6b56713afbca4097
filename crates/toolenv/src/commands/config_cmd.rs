//! Config command implementation

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::json;
use toolenv_core::config::global_config_path;

use super::Session;

/// Show effective configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct FileStatus {
    path: String,
    exists: bool,
}

impl FileStatus {
    fn of(path: &Path) -> Self {
        Self {
            path: path.display().to_string(),
            exists: path.is_file(),
        }
    }

    fn status(&self) -> &'static str {
        if self.exists { "(found)" } else { "(not found)" }
    }
}

/// Execute the config command
pub fn execute(args: ConfigArgs, session: &Session) -> Result<()> {
    let toolchain = &session.config.toolchain;
    let config_path: PathBuf = session
        .config_path
        .clone()
        .unwrap_or_else(|| global_config_path(&session.home_dir));

    let config_file = FileStatus::of(&config_path);
    let override_file = session.settings.override_path().map(FileStatus::of);
    let project_file = session.settings.project_path().map(|p| FileStatus::of(&p));
    let global_file = FileStatus::of(session.settings.global_path());
    let platform = session.toolchain().platform();

    if args.json {
        let output = json!({
            "toolchain": toolchain,
            "platform": platform,
            "configFile": config_file,
            "settingsFiles": {
                "override": override_file,
                "project": project_file,
                "global": global_file,
            }
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Configuration:");
    println!("  root_variable: {}", toolchain.root_variable);
    println!("  workspace_variable: {}", toolchain.workspace_variable);
    println!("  path_setting: {}", toolchain.path_setting);
    println!("  debug_setting: {}", toolchain.debug_setting);
    println!("  bin_dir: {}", toolchain.bin_dir);
    println!("  platform: {}", platform.settings_key());
    println!();
    println!("Config file:");
    println!("  {} {}", config_file.path, config_file.status());
    println!();
    println!("Settings files:");
    if let Some(file) = &override_file {
        println!("  Override: {} {}", file.path, file.status());
    }
    match &project_file {
        Some(file) => println!("  Project: {} {}", file.path, file.status()),
        None => println!("  Project: .toolenv.json (not found)"),
    }
    println!("  Global: {} {}", global_file.path, global_file.status());

    Ok(())
}
