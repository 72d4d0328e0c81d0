use super::*;
use pretty_assertions::assert_eq;
use wire_ir::{Binding, LifecycleHooks, ProviderValue, Span, StringInterner, Token, TypeRef};

use crate::error::ProviderErrorKind;

#[test]
fn test_flattens_nested_lists_in_order() {
    let interner = StringInterner::new();
    let a = TypeRef::new(interner.intern("A"));
    let b = Token::Type(interner.intern("B"));
    let c = TypeRef::new(interner.intern("C"));

    let entries = vec![
        ProviderEntry::Type(a.clone(), Span::new(0, 1)),
        ProviderEntry::List(vec![
            ProviderEntry::Descriptor(ProviderDescriptor::value(b, ProviderValue::Int(1))),
            ProviderEntry::List(vec![ProviderEntry::Type(c.clone(), Span::new(5, 6))]),
        ]),
    ];

    let out = normalize_providers(&entries);
    assert!(out.errors.is_empty());
    let tokens: Vec<_> = out.providers.iter().map(|p| p.token).collect();
    assert_eq!(tokens, vec![a.token(), b, c.token()]);
}

#[test]
fn test_bare_type_becomes_self_binding() {
    let interner = StringInterner::new();
    let ty = TypeRef::new(interner.intern("Logger")).with_hooks(LifecycleHooks::ON_INIT);

    let out = normalize_providers(&[ProviderEntry::Type(ty.clone(), Span::new(3, 9))]);
    let descriptor = &out.providers[0];
    assert_eq!(descriptor.token, ty.token());
    assert_eq!(descriptor.binding, Binding::Class(ty));
    assert_eq!(descriptor.hooks, LifecycleHooks::ON_INIT);
    assert_eq!(descriptor.span, Span::new(3, 9));
    assert!(!descriptor.multi);
}

#[test]
fn test_unknown_entries_reported_and_skipped() {
    let interner = StringInterner::new();
    let a = TypeRef::new(interner.intern("A"));
    let entries = vec![
        ProviderEntry::Unknown {
            shape: "42".into(),
            span: Span::new(7, 9),
        },
        ProviderEntry::Type(a.clone(), Span::DUMMY),
    ];

    let out = normalize_providers(&entries);
    assert_eq!(out.providers.len(), 1);
    assert_eq!(out.errors.len(), 1);
    assert_eq!(out.errors[0].kind, ProviderErrorKind::UnknownProviderShape);
    assert_eq!(out.errors[0].span, Span::new(7, 9));
    assert_eq!(
        out.errors[0].message,
        "Invalid provider - only instances of Provider and Type are allowed, got: 42"
    );
}
