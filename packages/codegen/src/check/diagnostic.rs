use serde::{Deserialize, Serialize};

/// Severity level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

/// A problem found in a descriptor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The severity level
    pub level: DiagnosticLevel,

    /// The rule that generated this diagnostic
    pub rule: String,

    /// Human-readable message
    pub message: String,

    /// Entity the problem was found in
    pub entity: String,

    /// Attribute the problem was found in, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    /// Optional suggestion for fixing the issue
    pub suggestion: Option<String>,
}

impl Diagnostic {
    fn with_level(
        level: DiagnosticLevel,
        rule: impl Into<String>,
        message: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            level,
            rule: rule.into(),
            message: message.into(),
            entity: entity.into(),
            attribute: None,
            suggestion: None,
        }
    }

    pub fn error(
        rule: impl Into<String>,
        message: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self::with_level(DiagnosticLevel::Error, rule, message, entity)
    }

    pub fn warning(
        rule: impl Into<String>,
        message: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self::with_level(DiagnosticLevel::Warning, rule, message, entity)
    }

    pub fn info(
        rule: impl Into<String>,
        message: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self::with_level(DiagnosticLevel::Info, rule, message, entity)
    }

    pub fn on_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.level == DiagnosticLevel::Error
    }
}
