//! CLI command dispatch and execution

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use toolenv_core::config::{Config, ConfigOverrides, resolve_config};
use toolenv_core::home::get_home_dir;
use toolenv_core::{ExecutionContext, FileSettings, ProcessEnvironment, Toolchain, TracingDiagnostics};

mod config_cmd;
mod env;
mod request;
mod setting;
mod which;

/// toolenv - Resolve toolchain settings, executables and subprocess environments
#[derive(Parser, Debug)]
#[command(
    name = "toolenv",
    version,
    about = "Resolve toolchain settings, executables and subprocess environments",
    long_about = "Merges layered JSON settings with the shell environment to decide how a toolchain executable should be run"
)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Highest-priority settings file
    #[arg(long, global = true, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Config file to use instead of ~/.config/toolenv/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory to search upward from for .toolenv.json (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    project_dir: Option<PathBuf>,

    /// Name of the toolchain root variable (default: GOROOT)
    #[arg(long, global = true, value_name = "NAME")]
    root_variable: Option<String>,

    /// Name of the workspace list variable (default: GOPATH)
    #[arg(long, global = true, value_name = "NAME")]
    workspace_variable: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a setting with shell environment fallback
    Setting(setting::SettingArgs),

    /// Locate an executable
    Which(which::WhichArgs),

    /// Show the executable path and environment for a subprocess
    Env(env::EnvArgs),

    /// Answer one JSON request read from stdin
    Request(request::RequestArgs),

    /// Show effective configuration
    Config(config_cmd::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self, context: ExecutionContext) -> Result<()> {
        let session = Session::load(&self.global, context)?;
        match self.command {
            Commands::Setting(args) => setting::execute(args, &session),
            Commands::Which(args) => which::execute(args, &session),
            Commands::Env(args) => env::execute(args, &session),
            Commands::Request(args) => request::execute(args, &session),
            Commands::Config(args) => config_cmd::execute(args, &session),
        }
    }
}

/// Collaborators resolved once per invocation
pub struct Session {
    context: ExecutionContext,
    home_dir: PathBuf,
    config_path: Option<PathBuf>,
    config: Config,
    settings: FileSettings,
    provider: ProcessEnvironment,
    diagnostics: TracingDiagnostics,
}

impl Session {
    fn load(global: &GlobalArgs, context: ExecutionContext) -> Result<Self> {
        let home_dir = get_home_dir()?;
        let project_dir = match &global.project_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let overrides = ConfigOverrides {
            root_variable: global.root_variable.clone(),
            workspace_variable: global.workspace_variable.clone(),
            config_path: global.config.clone(),
        };
        let config = resolve_config(&overrides, &home_dir)?;

        let mut settings = FileSettings::new(&project_dir, &home_dir);
        if let Some(path) = &global.settings {
            settings = settings.with_override(path);
        }

        Ok(Self {
            context,
            home_dir,
            config_path: global.config.clone(),
            config,
            settings,
            provider: ProcessEnvironment::default(),
            diagnostics: TracingDiagnostics,
        })
    }

    /// A resolver bound to this session's settings and environment
    pub fn toolchain(&self) -> Toolchain<'_> {
        Toolchain::new(
            self.context,
            &self.settings,
            &self.provider,
            &self.diagnostics,
        )
        .with_config(self.config.toolchain.clone())
    }
}
