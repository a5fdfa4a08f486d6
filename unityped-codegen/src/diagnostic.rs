//! Non-fatal findings collected during generation.

use std::fmt;

use serde::Serialize;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Input violates its contract or a pipeline was abandoned.
    Error,
    /// Something could not be generated as declared; a marker stands in for it.
    Warning,
}

impl Severity {
    pub fn is_error(&self) -> bool {
        matches!(self, Severity::Error)
    }

    pub fn is_warning(&self) -> bool {
        matches!(self, Severity::Warning)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Stage of generation that reported a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Checking the type catalog handed over by discovery.
    Catalog,
    /// Resolving member views.
    Resolve,
    /// Project metadata reflection.
    Reflection,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Catalog => write!(f, "catalog"),
            Phase::Resolve => write!(f, "resolve"),
            Phase::Reflection => write!(f, "reflection"),
        }
    }
}

/// A diagnostic message from a generation phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub phase: Phase,
    pub message: String,
    /// Optional location, e.g. `Game.Player.inventory`.
    pub location: Option<String>,
}

impl Diagnostic {
    pub fn error(phase: Phase, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, phase, message)
    }

    pub fn warning(phase: Phase, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, phase, message)
    }

    fn new(severity: Severity, phase: Phase, message: impl Into<String>) -> Self {
        Self {
            severity,
            phase,
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.phase, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {loc})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_with_location() {
        let diag = Diagnostic::warning(Phase::Resolve, "member type is a pointer")
            .at("Game.Buffer.raw");
        assert!(diag.severity.is_warning());
        assert_eq!(diag.location.as_deref(), Some("Game.Buffer.raw"));
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error(Phase::Reflection, "no project root");
        assert_eq!(diag.to_string(), "error[reflection]: no project root");
    }

    #[test]
    fn test_diagnostic_serializes_lowercase() {
        let diag = Diagnostic::warning(Phase::Catalog, "ok");
        let json = serde_json::to_value(&diag).unwrap();
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["phase"], "catalog");
    }
}
