//! Provider errors and diagnostics.
//!
//! Resolution never stops at the first problem. Every error is recorded in an
//! [`ErrorList`] owned by the scope being resolved, and callers decide what to
//! do with the collection: the module analyzer fails with
//! [`ModuleResolveError`], the view resolver hands the list back alongside
//! its results.

use wire_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
use wire_ir::{Span, StringInterner, Token};

/// What went wrong.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProviderErrorKind {
    /// A provider entry that is neither a descriptor, a type, nor a list.
    UnknownProviderShape,
    /// One scope mixes multi and single bindings for the same token.
    MultiBindingConflict { token: Token },
    /// A provider (transitively) depends on itself.
    CyclicDependency { token: Token },
    /// A dependency could not be satisfied.
    NoProvider { token: Token },
}

impl ProviderErrorKind {
    pub fn code(self) -> ErrorCode {
        match self {
            ProviderErrorKind::UnknownProviderShape => ErrorCode::E0101,
            ProviderErrorKind::MultiBindingConflict { .. } => ErrorCode::E0102,
            ProviderErrorKind::CyclicDependency { .. } => ErrorCode::E0201,
            ProviderErrorKind::NoProvider { .. } => ErrorCode::E0202,
        }
    }

    /// The token the error is about, if any.
    pub fn token(self) -> Option<Token> {
        match self {
            ProviderErrorKind::UnknownProviderShape => None,
            ProviderErrorKind::MultiBindingConflict { token }
            | ProviderErrorKind::CyclicDependency { token }
            | ProviderErrorKind::NoProvider { token } => Some(token),
        }
    }
}

/// A resolution error with its rendered message and location.
#[derive(Clone, Eq, PartialEq, Hash, Debug, thiserror::Error)]
#[error("{message}")]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
    pub span: Span,
}

impl ProviderError {
    #[cold]
    pub fn unknown_shape(shape: &str, span: Span) -> Self {
        ProviderError {
            kind: ProviderErrorKind::UnknownProviderShape,
            message: format!(
                "Invalid provider - only instances of Provider and Type are allowed, got: {shape}"
            ),
            span,
        }
    }

    #[cold]
    pub fn multi_binding_conflict(token: Token, span: Span, interner: &StringInterner) -> Self {
        ProviderError {
            kind: ProviderErrorKind::MultiBindingConflict { token },
            message: format!(
                "Mixing multi and non multi provider is not possible for token {}",
                token.display(interner)
            ),
            span,
        }
    }

    #[cold]
    pub fn cyclic_dependency(token: Token, span: Span, interner: &StringInterner) -> Self {
        ProviderError {
            kind: ProviderErrorKind::CyclicDependency { token },
            message: format!(
                "Cannot instantiate cyclic dependency! {}",
                token.display(interner)
            ),
            span,
        }
    }

    #[cold]
    pub fn no_provider(token: Token, span: Span, interner: &StringInterner) -> Self {
        ProviderError {
            kind: ProviderErrorKind::NoProvider { token },
            message: format!("No provider for {}", token.display(interner)),
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Convert to a diagnostic with a fix suggestion.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::new(self.code(), self.span).with_message(self.message.clone());
        match self.kind {
            ProviderErrorKind::UnknownProviderShape => diag
                .with_label("not a provider")
                .with_suggestion(
                    "use a type, a `{ provide, use* }` descriptor, or a list of those",
                ),
            ProviderErrorKind::MultiBindingConflict { .. } => diag
                .with_label("bindings for this token disagree on `multi`")
                .with_suggestion("mark every binding of the token `multi`, or none of them"),
            ProviderErrorKind::CyclicDependency { .. } => diag
                .with_label("cycle detected while instantiating this provider")
                .with_note("the provider is reachable from its own dependencies")
                .with_suggestion("break the cycle with an optional or lazily injected dependency"),
            ProviderErrorKind::NoProvider { .. } => diag
                .with_label("requested here")
                .with_suggestion("declare a provider for the token, or mark the dependency optional"),
        }
    }
}

/// Errors collected while resolving one scope (a module, or all elements of
/// one view).
#[derive(Clone, Debug, Default)]
pub struct ErrorList {
    errors: Vec<ProviderError>,
    /// Maximum number of recorded errors (0 = unlimited).
    limit: usize,
    /// Errors reported after the limit was reached.
    dropped: usize,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        ErrorList {
            limit,
            ..Self::default()
        }
    }

    /// Record an error, unless the limit is reached.
    pub fn push(&mut self, error: ProviderError) {
        if self.limit > 0 && self.errors.len() >= self.limit {
            self.dropped += 1;
            return;
        }
        tracing::debug!(code = %error.code(), span = %error.span, "{}", error.message);
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Number of errors discarded because of the limit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn as_slice(&self) -> &[ProviderError] {
        &self.errors
    }

    /// Render every error against `source`, sorted by position.
    ///
    /// Errors dropped by the limit show up as one trailing `E9002`
    /// diagnostic.
    pub fn diagnostics(&self, source: &str, config: DiagnosticConfig) -> Vec<Diagnostic> {
        let mut queue = DiagnosticQueue::with_config(config);
        for error in &self.errors {
            queue.add(error.to_diagnostic(), source);
        }
        queue.suppress(self.dropped);
        queue.flush()
    }
}

/// Module-level resolution failure.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ModuleResolveError {
    /// One or more provider errors; the message lists all recorded ones and
    /// how many were dropped.
    #[error("Provider parse errors:\n{}", join_messages(.errors))]
    Providers { errors: ErrorList },
}

impl ModuleResolveError {
    pub fn errors(&self) -> &[ProviderError] {
        match self {
            ModuleResolveError::Providers { errors } => errors.as_slice(),
        }
    }

    /// Errors discarded because `ResolveConfig::error_limit` was reached.
    pub fn dropped(&self) -> usize {
        match self {
            ModuleResolveError::Providers { errors } => errors.dropped(),
        }
    }

    pub fn diagnostics(&self, source: &str, config: DiagnosticConfig) -> Vec<Diagnostic> {
        match self {
            ModuleResolveError::Providers { errors } => errors.diagnostics(source, config),
        }
    }
}

fn join_messages(errors: &ErrorList) -> String {
    let mut lines: Vec<_> = errors.as_slice().iter().map(|e| e.message.clone()).collect();
    match errors.dropped() {
        0 => {}
        1 => lines.push("(1 more error not reported)".to_owned()),
        n => lines.push(format!("({n} more errors not reported)")),
    }
    lines.join("\n")
}
