use super::*;
use crate::StringInterner;

#[test]
fn test_plain_request_has_no_modifiers() {
    let interner = StringInterner::new();
    let dep = DependencyRequest::new(Token::Type(interner.intern("Logger")));
    assert!(!dep.is_optional());
    assert!(!dep.is_self());
    assert!(!dep.is_skip_self());
    assert!(!dep.is_host());
    assert!(!dep.is_attribute());
    assert!(!dep.is_query());
}

#[test]
fn test_flags_accumulate() {
    let interner = StringInterner::new();
    let dep = DependencyRequest::new(Token::Type(interner.intern("Logger")))
        .with_flags(DepFlags::OPTIONAL)
        .with_flags(DepFlags::HOST);
    assert!(dep.is_optional());
    assert!(dep.is_host());
    assert!(!dep.is_self());
}

#[test]
fn test_query_request() {
    let interner = StringInterner::new();
    let item = Token::Type(interner.intern("Item"));
    let dep = DependencyRequest::new(item).with_query(QueryMeta::new(vec![item]));
    assert!(dep.is_query());
}
