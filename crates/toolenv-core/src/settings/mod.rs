//! Layered settings scopes
//!
//! Settings come from several scopes ordered by priority (view, project,
//! global). Each scope is a JSON object that may also carry per-platform
//! override maps under `"osx"`, `"windows"` and `"linux"`.

mod discovery;
mod resolve;
mod scope;

pub use discovery::{FileSettings, GLOBAL_SETTINGS_LABEL, OVERRIDE_LABEL, PROJECT_LABEL};
pub use resolve::{Resolved, resolve};
pub use scope::{Setting, SettingsScope};

/// Supplier of the ordered settings scopes, highest priority first.
///
/// Called once per resolution; implementations must not cache stale data
/// across calls.
pub trait SettingsProvider {
    /// The scopes to consult for this call
    fn scopes(&self) -> Vec<SettingsScope>;
}

impl SettingsProvider for Vec<SettingsScope> {
    fn scopes(&self) -> Vec<SettingsScope> {
        self.clone()
    }
}
