//! Core library for toolenv
//!
//! Resolves the settings, executable path and environment block needed to run
//! an external toolchain's executables (`go`, `gofmt`, ...) as subprocesses.
//!
//! Values are merged from:
//! - Layered settings scopes (view, project, global), each with optional
//!   per-platform override maps
//! - The login-shell environment and PATH as supplied by an
//!   [`EnvironmentProvider`]
//!
//! Every call re-resolves from fresh inputs; nothing is cached.

pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod home;
pub mod logging;
pub mod probe;
pub mod provider;
pub mod request;
pub mod settings;
pub mod toolchain;

pub use context::{ExecutionContext, Platform, UiRegistration};
pub use diagnostics::{CapturedDiagnostics, Diagnostics, Severity, TracingDiagnostics};
pub use error::ToolchainError;
pub use provider::{Environment, EnvironmentProvider, ProcessEnvironment, StaticEnvironment};
pub use settings::{FileSettings, Setting, SettingsProvider, SettingsScope};
pub use toolchain::{Sourced, SubprocessInfo, Toolchain};
