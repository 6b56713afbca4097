//! Two-pass layered lookup

use super::scope::{Setting, SettingsScope};
use crate::context::Platform;

/// Result of a layered lookup
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// What was found
    pub setting: Setting,
    /// Label of the scope it came from; `None` iff the setting is absent
    pub source: Option<String>,
}

impl Resolved {
    fn absent() -> Self {
        Self {
            setting: Setting::Absent,
            source: None,
        }
    }
}

/// Find the most specific value for `name`.
///
/// Every scope's platform map is consulted (in priority order) before any
/// scope's top level, so a platform override in a low-priority scope beats a
/// generic value in a high-priority scope.
pub fn resolve(name: &str, scopes: &[SettingsScope], platform: Platform) -> Resolved {
    for scope in scopes {
        let setting = scope.get_for_platform(platform, name);
        if setting.is_present() {
            return Resolved {
                setting,
                source: Some(format!("{} (os-specific)", scope.label())),
            };
        }
    }

    for scope in scopes {
        let setting = scope.get(name);
        if setting.is_present() {
            return Resolved {
                setting,
                source: Some(scope.label().to_string()),
            };
        }
    }

    Resolved::absent()
}
