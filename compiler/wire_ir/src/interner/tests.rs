use super::*;

#[test]
fn test_intern_and_lookup() {
    let interner = StringInterner::new();

    let logger = interner.intern("Logger");
    let http = interner.intern("HttpClient");
    let logger2 = interner.intern("Logger");

    assert_eq!(logger, logger2);
    assert_ne!(logger, http);

    assert_eq!(interner.lookup(logger), "Logger");
    assert_eq!(interner.lookup(http), "HttpClient");
    assert_eq!(interner.len(), 3);
}

#[test]
fn test_empty_string() {
    let interner = StringInterner::new();
    assert!(interner.is_empty());
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert_eq!(interner.lookup(Name::EMPTY), "");
}

#[test]
fn test_foreign_name_looks_up_empty() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(99)), "");
}
