//! The [`Diagnostic`] shown for a provider resolution error.
//!
//! Resolution only ever reports errors, and each one points at a single
//! source location: the provider entry, the binding, or the element that
//! requested a dependency. A diagnostic therefore has exactly one [`Label`].

use std::fmt;

use wire_ir::Span;

use crate::ErrorCode;

/// The source location a diagnostic points at.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    /// Text shown next to the location; may be empty.
    pub message: String,
}

/// A resolver error ready to be shown to the user.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub label: Label,
    /// Why the error happened.
    pub notes: Vec<String>,
    /// How to fix it.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    #[cold]
    pub fn new(code: ErrorCode, span: Span) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            label: Label {
                span,
                message: String::new(),
            },
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the text shown next to the span.
    pub fn with_label(mut self, message: impl Into<String>) -> Self {
        self.label.message = message.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn span(&self) -> Span {
        self.label.span
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;

        write!(f, "\n  --> {}", self.label.span)?;
        if !self.label.message.is_empty() {
            write!(f, ": {}", self.label.message)?;
        }

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
