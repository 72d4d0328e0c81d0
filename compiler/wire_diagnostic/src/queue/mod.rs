//! Ordering and capping of diagnostics before they are shown.
//!
//! Resolution reports errors in the order it discovers them, which follows
//! the dependency graph rather than the source. The queue re-sorts them by
//! line and column, drops repeats of the same error at the same span, and
//! folds everything past the error limit into one trailing [`E9002`]
//! diagnostic.
//!
//! [`E9002`]: ErrorCode::E9002

use wire_ir::Span;

use crate::span_utils::offset_to_line_col;
use crate::{Diagnostic, ErrorCode};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of diagnostics shown (0 = unlimited).
    pub error_limit: usize,
    /// Skip a diagnostic with the same code, message and span as a queued one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 20,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
struct Positioned {
    diagnostic: Diagnostic,
    line: u32,
    column: u32,
}

/// Collects diagnostics for one source text.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct DiagnosticQueue {
    queued: Vec<Positioned>,
    /// Errors over the limit, including ones dropped before reaching the queue.
    suppressed: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            queued: Vec::new(),
            suppressed: 0,
            config,
        }
    }

    /// Queue `diag`, positioned by its span's start in `source`.
    ///
    /// Returns `false` if it was a duplicate or over the limit.
    pub fn add(&mut self, diag: Diagnostic, source: &str) -> bool {
        if self.config.deduplicate && self.is_duplicate(&diag) {
            return false;
        }
        if self.limit_reached() {
            self.suppressed += 1;
            return false;
        }

        let (line, column) = offset_to_line_col(source, diag.span().start);
        self.queued.push(Positioned {
            diagnostic: diag,
            line,
            column,
        });
        true
    }

    /// Account for `count` errors that were discarded before being queued.
    pub fn suppress(&mut self, count: usize) {
        self.suppressed += count;
    }

    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.queued.len() >= self.config.error_limit
    }

    pub fn len(&self) -> usize {
        self.queued.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    pub fn suppressed(&self) -> usize {
        self.suppressed
    }

    /// Drain the queue in source order.
    ///
    /// Diagnostics at the same position keep their report order. If any
    /// error was suppressed, a [`too_many_errors`] diagnostic at the last
    /// position comes last.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        self.queued.sort_by_key(|d| (d.line, d.column));
        let mut out: Vec<_> = self.queued.drain(..).map(|d| d.diagnostic).collect();

        let suppressed = std::mem::take(&mut self.suppressed);
        if suppressed > 0 {
            let span = out.last().map_or(Span::DUMMY, Diagnostic::span);
            out.push(too_many_errors(suppressed, span));
        }
        out
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        self.queued.iter().any(|queued| {
            let q = &queued.diagnostic;
            q.code == diag.code && q.span() == diag.span() && q.message == diag.message
        })
    }
}

/// The diagnostic standing in for `suppressed` unreported errors.
#[cold]
pub fn too_many_errors(suppressed: usize, span: Span) -> Diagnostic {
    let message = if suppressed == 1 {
        "1 more error not reported".to_owned()
    } else {
        format!("{suppressed} more errors not reported")
    };
    Diagnostic::new(ErrorCode::E9002, span)
        .with_message(message)
        .with_label("error limit reached here")
        .with_suggestion("raise the error limit to see every error")
}

#[cfg(test)]
mod tests;
