//! Toolchain resolution
//!
//! [`Toolchain`] ties the layered settings, the shell environment provider and
//! a diagnostics sink together and exposes the three entry points:
//!
//! - [`Toolchain::setting_value`]: a named setting with environment fallback,
//!   validating the toolchain root and workspace variables against the disk
//! - [`Toolchain::executable_path`]: an executable located via the PATH
//!   setting, then the shell PATH
//! - [`Toolchain::subprocess_info`]: the executable plus the environment block
//!   to run it with
//!
//! Each entry point checks its [`ExecutionContext`], asks the settings
//! provider for fresh scopes and resolves from scratch.

mod executable;
mod setting;
mod subprocess;

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::config::ToolchainConfig;
use crate::context::{ExecutionContext, Platform};
use crate::diagnostics::{Diagnostics, PREFIX, Severity, is_truthy};
use crate::provider::{Environment, EnvironmentProvider};
use crate::settings::{SettingsProvider, SettingsScope, resolve};

/// A resolved value together with where it came from
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sourced<T> {
    pub value: T,
    /// Scope label (e.g. "project file (os-specific)") or shell identifier
    pub source: String,
}

impl Sourced<Value> {
    /// The value as environment text; non-strings are rendered as JSON
    pub fn text(&self) -> String {
        stringify(&self.value)
    }
}

/// Everything needed to spawn a toolchain executable
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubprocessInfo {
    /// Absolute path of the executable
    pub executable: PathBuf,
    /// Complete environment for the child process
    pub environment: Environment,
}

/// Resolver bound to one set of collaborators
pub struct Toolchain<'a> {
    context: ExecutionContext,
    platform: Platform,
    config: ToolchainConfig,
    settings: &'a dyn SettingsProvider,
    provider: &'a dyn EnvironmentProvider,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Toolchain<'a> {
    /// Create a resolver for the detected platform with default variable names
    pub fn new(
        context: ExecutionContext,
        settings: &'a dyn SettingsProvider,
        provider: &'a dyn EnvironmentProvider,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self {
            context,
            platform: Platform::detect(),
            config: ToolchainConfig::default(),
            settings,
            provider,
            diagnostics,
        }
    }

    /// Resolve as if running on `platform`
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Use custom variable names
    pub fn with_config(mut self, config: ToolchainConfig) -> Self {
        self.config = config;
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn config(&self) -> &ToolchainConfig {
        &self.config
    }

    fn scopes(&self) -> Vec<SettingsScope> {
        self.settings.scopes()
    }

    fn suffixed(&self, name: &str) -> String {
        format!("{name}{}", self.platform.executable_suffix())
    }

    fn debug_enabled(&self, scopes: &[SettingsScope]) -> bool {
        resolve(&self.config.debug_setting, scopes, self.platform)
            .setting
            .value()
            .is_some_and(is_truthy)
    }

    /// Emit a line only when the debug setting is on
    fn debug(&self, scopes: &[SettingsScope], message: impl FnOnce() -> String) {
        if self.debug_enabled(scopes) {
            self.diagnostics
                .emit(Severity::Debug, &format!("{PREFIX}{}", message()));
        }
    }

    /// Emit a line unconditionally
    fn warn(&self, message: &str) {
        self.diagnostics
            .emit(Severity::Warning, &format!("{PREFIX}warning - {message}"));
    }
}

/// Render a setting value as environment text
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
