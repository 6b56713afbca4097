//! toolenv - Resolve how to run toolchain executables
//!
//! A thin CLI over `toolenv-core`: looks up layered settings, locates
//! executables and prints the environment a subprocess should be spawned
//! with.

use clap::Parser;
use toolenv_core::{ExecutionContext, logging};

mod commands;

use commands::Cli;

fn main() {
    logging::init();
    let Some(ui) = ExecutionContext::register_ui() else {
        eprintln!("Error: the UI context is already registered");
        std::process::exit(1);
    };
    let cli = Cli::parse();

    if let Err(e) = cli.execute(ui.context()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
