//! Structured diagnostics for rejected accesses
//!
//! Every policy rejection produces exactly one `Diagnostic` and forwards it
//! to an injected `DiagnosticsSink`. The stream is advisory: sinks are
//! fire-and-forget and callers are free to discard it entirely.

use std::fmt;
use std::io::Write;

use parking_lot::Mutex;
use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A policy violation; the access is unconditionally blocked
    Error,
    /// Suspicious but typed rejection (e.g. a value/parameter type mismatch)
    Warning,
}

impl Severity {
    /// Severity label as a lowercase string
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// A diagnostic message: severity, human-readable message, and the name of
/// the member the rejection concerns. Pure value, produced and consumed
/// within a single operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Human-readable description of the rejection
    pub message: String,
    /// Name of the field or method involved
    pub subject: String,
}

impl Diagnostic {
    /// Create a diagnostic
    pub fn new(severity: Severity, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            subject: subject.into(),
        }
    }

    /// Create an error diagnostic
    pub fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, subject, message)
    }

    /// Create a warning diagnostic
    pub fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, subject, message)
    }

    /// Machine-readable JSON form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.severity.as_str(),
            self.subject,
            self.message
        )
    }
}

/// Receiver for diagnostics. Implementations must be shareable across the
/// validator and the gateway; emission is fire-and-forget.
pub trait DiagnosticsSink: Send + Sync {
    /// Accept one diagnostic
    fn emit(&self, diag: Diagnostic);
}

/// Sink that collects diagnostics in memory, in emission order. The
/// deterministic choice for tests.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of collected diagnostics
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if nothing has been collected
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Snapshot of the collected diagnostics
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Take all collected diagnostics, leaving the sink empty
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock())
    }
}

impl DiagnosticsSink for MemorySink {
    fn emit(&self, diag: Diagnostic) {
        self.entries.lock().push(diag);
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticsSink for NullSink {
    fn emit(&self, _diag: Diagnostic) {}
}

/// Sink that writes colored `[error]`/`[warning]` lines to stderr.
#[derive(Debug, Clone, Copy)]
pub struct TermSink {
    choice: ColorChoice,
}

impl TermSink {
    /// Create a sink with automatic color detection
    pub fn new() -> Self {
        Self {
            choice: ColorChoice::Auto,
        }
    }

    /// Create a sink with an explicit color choice
    pub fn with_choice(choice: ColorChoice) -> Self {
        Self { choice }
    }
}

impl Default for TermSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticsSink for TermSink {
    fn emit(&self, diag: Diagnostic) {
        let mut out = StandardStream::stderr(self.choice);
        let color = match diag.severity {
            Severity::Error => Color::Red,
            Severity::Warning => Color::Yellow,
        };
        let _ = out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(out, "[{}]", diag.severity.as_str());
        let _ = out.reset();
        let _ = writeln!(out, " {}: {}", diag.subject, diag.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let err = Diagnostic::error("name", "field `name` is not public");
        assert_eq!(err.severity, Severity::Error);
        assert_eq!(err.subject, "name");

        let warn = Diagnostic::warning("setId", "value not accepted");
        assert_eq!(warn.severity, Severity::Warning);
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("count", "field `count` is static");
        assert_eq!(diag.to_string(), "[error] count: field `count` is static");
    }

    #[test]
    fn test_json_shape() {
        let diag = Diagnostic::warning("setId", "value not accepted");
        let json = diag.to_json().unwrap();
        assert!(json.contains("\"severity\":\"warning\""));
        assert!(json.contains("\"subject\":\"setId\""));
        assert!(json.contains("\"message\":\"value not accepted\""));
    }

    #[test]
    fn test_memory_sink_collects_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.emit(Diagnostic::error("a", "first"));
        sink.emit(Diagnostic::warning("b", "second"));

        assert_eq!(sink.len(), 2);
        let entries = sink.entries();
        assert_eq!(entries[0].subject, "a");
        assert_eq!(entries[1].subject, "b");

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_null_sink_discards() {
        let sink = NullSink;
        sink.emit(Diagnostic::error("a", "dropped"));
    }
}
