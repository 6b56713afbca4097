//! Settings scope values

use serde_json::{Map, Value};

use crate::context::Platform;

/// Outcome of a settings lookup.
///
/// `Absent` (key not present) and `Null` (key present, explicitly null) are
/// kept apart so an explicit unset in a closer scope can shadow inherited
/// values.
#[derive(Debug, Clone, PartialEq)]
pub enum Setting {
    /// The key is not present
    Absent,
    /// The key is present with a null value
    Null,
    /// The key is present with a value
    Value(Value),
}

impl Setting {
    fn from_entry(entry: Option<&Value>) -> Self {
        match entry {
            None => Setting::Absent,
            Some(Value::Null) => Setting::Null,
            Some(value) => Setting::Value(value.clone()),
        }
    }

    /// Whether the key was present at all
    pub fn is_present(&self) -> bool {
        !matches!(self, Setting::Absent)
    }

    /// The value, if present and not null
    pub fn value(&self) -> Option<&Value> {
        match self {
            Setting::Value(value) => Some(value),
            Setting::Absent | Setting::Null => None,
        }
    }
}

/// One layer of settings with its provenance label
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsScope {
    values: Map<String, Value>,
    label: String,
}

impl SettingsScope {
    /// Create a scope from a JSON object
    pub fn new(values: Map<String, Value>, label: impl Into<String>) -> Self {
        Self {
            values,
            label: label.into(),
        }
    }

    /// Create a scope from any JSON value.
    ///
    /// Returns `None` when the value is not an object.
    pub fn from_value(value: Value, label: impl Into<String>) -> Option<Self> {
        match value {
            Value::Object(values) => Some(Self::new(values, label)),
            _ => None,
        }
    }

    /// An empty scope
    pub fn empty(label: impl Into<String>) -> Self {
        Self::new(Map::new(), label)
    }

    /// Provenance label, e.g. "project file"
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Top-level lookup
    pub fn get(&self, name: &str) -> Setting {
        Setting::from_entry(self.values.get(name))
    }

    /// Lookup inside the platform override map.
    ///
    /// A platform key whose value is not an object is ignored.
    pub fn get_for_platform(&self, platform: Platform, name: &str) -> Setting {
        match self.values.get(platform.settings_key()) {
            Some(Value::Object(overrides)) => Setting::from_entry(overrides.get(name)),
            _ => Setting::Absent,
        }
    }
}
