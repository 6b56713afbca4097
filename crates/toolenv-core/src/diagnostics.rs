//! Diagnostic output
//!
//! Resolution writes short human-readable lines describing why a value or
//! executable was skipped. Debug lines are only produced when the debug
//! setting is truthy; root mismatch warnings are always produced.

use std::sync::Mutex;

use serde_json::Value;

/// Prefix of every diagnostic line
pub const PREFIX: &str = "toolenv: ";

/// How important a diagnostic line is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Only produced when the debug setting is on
    Debug,
    /// Always produced
    Warning,
}

/// Destination for diagnostic lines
pub trait Diagnostics {
    /// Write one line. The line already carries [`PREFIX`].
    fn emit(&self, severity: Severity, line: &str);
}

/// Routes diagnostics into `tracing`.
///
/// Debug lines are logged at info level, since the debug setting already
/// gates them; warnings are logged at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, severity: Severity, line: &str) {
        match severity {
            Severity::Debug => tracing::info!("{line}"),
            Severity::Warning => tracing::warn!("{line}"),
        }
    }
}

/// Keeps every emitted line in memory
#[derive(Debug, Default)]
pub struct CapturedDiagnostics {
    lines: Mutex<Vec<(Severity, String)>>,
}

impl CapturedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines emitted so far
    pub fn lines(&self) -> Vec<String> {
        self.filtered(|_| true)
    }

    /// Lines emitted as warnings
    pub fn warnings(&self) -> Vec<String> {
        self.filtered(|severity| severity == Severity::Warning)
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn filtered(&self, keep: impl Fn(Severity) -> bool) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| {
                lines
                    .iter()
                    .filter(|(severity, _)| keep(*severity))
                    .map(|(_, line)| line.clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Diagnostics for CapturedDiagnostics {
    fn emit(&self, severity: Severity, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((severity, line.to_string()));
        }
    }
}

/// Interpret a debug setting value.
///
/// The string `"0"` is false; otherwise the usual truthiness applies: null,
/// `false`, zero, and empty strings, arrays and objects are false.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Name of a JSON value's type, for messages
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
