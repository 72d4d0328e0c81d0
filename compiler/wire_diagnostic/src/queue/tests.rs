use super::*;
use pretty_assertions::assert_eq;

const SOURCE: &str = "<app>\n  <child></child>\n</app>\n";

fn no_provider(name: &str, span: Span) -> Diagnostic {
    Diagnostic::new(ErrorCode::E0202, span)
        .with_message(format!("No provider for {name}"))
        .with_label("requested here")
}

fn messages(diags: &[Diagnostic]) -> Vec<&str> {
    diags.iter().map(|d| d.message.as_str()).collect()
}

#[test]
fn test_flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());

    assert!(queue.add(no_provider("B", Span::new(8, 15)), SOURCE));
    assert!(queue.add(no_provider("A", Span::new(0, 5)), SOURCE));

    let flushed = queue.flush();
    assert_eq!(messages(&flushed), vec!["No provider for A", "No provider for B"]);
    assert!(queue.is_empty());
}

#[test]
fn test_same_position_keeps_report_order() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(no_provider("Z", Span::new(8, 15)), SOURCE);
    queue.add(no_provider("Y", Span::new(8, 15)), SOURCE);

    assert_eq!(
        messages(&queue.flush()),
        vec!["No provider for Z", "No provider for Y"]
    );
}

#[test]
fn test_duplicates_at_same_span_dropped() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(no_provider("A", Span::new(0, 5)), SOURCE));
    assert!(!queue.add(no_provider("A", Span::new(0, 5)), SOURCE));
    assert!(queue.add(no_provider("A", Span::new(8, 15)), SOURCE));
    assert_eq!(queue.len(), 2);
    assert_eq!(queue.suppressed(), 0);
}

#[test]
fn test_error_limit_appends_summary() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    assert!(queue.add(no_provider("A", Span::new(0, 5)), SOURCE));
    assert!(queue.add(no_provider("B", Span::new(8, 15)), SOURCE));
    assert!(queue.limit_reached());
    assert!(!queue.add(no_provider("C", Span::new(16, 20)), SOURCE));

    let flushed = queue.flush();
    assert_eq!(
        messages(&flushed),
        vec!["No provider for A", "No provider for B", "1 more error not reported"]
    );
    assert_eq!(flushed[2].code, ErrorCode::E9002);
    assert_eq!(flushed[2].span(), Span::new(8, 15));
    assert_eq!(queue.suppressed(), 0);
}

#[test]
fn test_suppressed_upstream() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(no_provider("A", Span::new(0, 5)), SOURCE);
    queue.suppress(3);

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 2);
    assert_eq!(flushed[1].message, "3 more errors not reported");
}

#[test]
fn test_nothing_suppressed_no_summary() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.flush().is_empty());
}
