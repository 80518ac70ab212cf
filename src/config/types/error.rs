//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// DiagnosticKind
// ============================================================================

/// Classification of a validation failure.
///
/// Every diagnostic carries one of these so callers (and tests) can match on
/// the failure class without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A URL field does not parse as an absolute http/https URL.
    MalformedUrl,
    /// A required field is missing, empty, or has an invalid format.
    MissingField,
    /// Two page items in the same topic share a slug.
    DuplicateSlug,
    /// A topic's default link does not match any of its item slugs.
    DanglingLink,
    /// A topic has no page items.
    EmptyTopic,
}

impl DiagnosticKind {
    /// Get kind label for display.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::MalformedUrl => "malformed url",
            Self::MissingField => "missing or invalid field",
            Self::DuplicateSlug => "duplicate slug",
            Self::DanglingLink => "dangling default link",
            Self::EmptyTopic => "empty topic",
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Failure classification.
    pub kind: DiagnosticKind,
    /// Config field path (e.g., "topics[0].link")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(kind: DiagnosticKind, field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            kind,
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets, kind label dimmed
        writeln!(
            f,
            "{}{}{} {}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed(),
            self.kind.label().dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected non-fatal hints (config smells, mismatches).
    hints: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, kind: DiagnosticKind, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(kind, field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        kind: DiagnosticKind,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(kind, field, message).with_hint(hint));
    }

    /// Add a hint (collected for batch display, never fatal).
    pub fn hint(&mut self, field: FieldPath, message: impl Into<String>) {
        self.hints.push((field, message.into()));
    }

    /// Print collected hints in a grouped format.
    ///
    /// Call this after validation to display all hints at once.
    pub fn print_hints(&self) {
        if self.hints.is_empty() {
            return;
        }
        for (field, message) in &self.hints {
            crate::log!("hint"; "[{}] {}", field.as_str(), message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    /// Check whether any collected error has the given kind.
    pub fn has_kind(&self, kind: DiagnosticKind) -> bool {
        self.errors.iter().any(|e| e.kind == kind)
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("doctopics.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("doctopics.toml"));

        let validation_err = ConfigError::Validation("Test validation error".to_string());
        let display = format!("{validation_err}");
        assert!(display.contains("Test validation error"));
    }

    #[test]
    fn test_diagnostic_display_includes_kind_and_field() {
        let diag = ConfigDiagnostic::new(
            DiagnosticKind::DanglingLink,
            FieldPath::new("topics[0].link"),
            "link 'about/missing' does not match any item slug",
        )
        .with_hint("set link to one of the item slugs");

        let display = format!("{diag}");
        assert!(display.contains("topics[0].link"));
        assert!(display.contains("dangling default link"));
        assert!(display.contains("hint:"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diag = ConfigDiagnostics::new();
        assert!(diag.into_result().is_ok());

        let mut diag = ConfigDiagnostics::new();
        diag.error(
            DiagnosticKind::EmptyTopic,
            FieldPath::new("topics[1].items"),
            "topic has no items",
        );
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.has_kind(DiagnosticKind::EmptyTopic));
        assert!(!err.has_kind(DiagnosticKind::DuplicateSlug));
    }
}
