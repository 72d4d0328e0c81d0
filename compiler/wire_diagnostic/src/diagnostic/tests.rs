use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder() {
    let diag = Diagnostic::new(ErrorCode::E0202, Span::new(10, 20))
        .with_message("No provider for Logger")
        .with_label("requested here")
        .with_note("Logger is not provided by any enclosing element")
        .with_suggestion("add Logger to a module's providers");

    assert_eq!(diag.code, ErrorCode::E0202);
    assert_eq!(diag.span(), Span::new(10, 20));
    assert_eq!(diag.label.message, "requested here");
    assert_eq!(diag.notes.len(), 1);
    assert_eq!(diag.suggestions.len(), 1);
}

#[test]
fn test_display() {
    let diag = Diagnostic::new(ErrorCode::E0201, Span::new(3, 8))
        .with_message("Cannot instantiate cyclic dependency! A")
        .with_label("while resolving A")
        .with_note("A depends on itself")
        .with_suggestion("make one of the dependencies optional");

    assert_eq!(
        diag.to_string(),
        "error[E0201]: Cannot instantiate cyclic dependency! A\n  --> 3..8: while resolving A\n  = note: A depends on itself\n  = help: make one of the dependencies optional"
    );
}

#[test]
fn test_display_without_label_text() {
    let diag = Diagnostic::new(ErrorCode::E0101, Span::new(0, 4)).with_message("bad entry");
    assert_eq!(diag.to_string(), "error[E0101]: bad entry\n  --> 0..4");
}
