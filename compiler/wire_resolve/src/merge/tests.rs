#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;
use wire_ir::{Binding, Builtin, LifecycleHooks, ProviderValue, Token, TypeRef};

use crate::error::ProviderErrorKind;

struct Fixture {
    interner: StringInterner,
}

impl Fixture {
    fn new() -> Self {
        Fixture {
            interner: StringInterner::new(),
        }
    }

    fn token(&self, name: &str) -> Token {
        Token::Type(self.interner.intern(name))
    }

    fn ty(&self, name: &str) -> TypeRef {
        TypeRef::new(self.interner.intern(name))
    }

    fn int(&self, token: Token, value: i64) -> ProviderDescriptor {
        ProviderDescriptor::value(token, ProviderValue::Int(value))
    }

    fn merge(&self, providers: &[ProviderDescriptor]) -> (ProviderMap, ErrorList) {
        let mut map = ProviderMap::new();
        let mut errors = ErrorList::new();
        merge_providers(
            providers,
            MergeScope::new(ProviderKind::PublicService, false, Span::new(0, 10)),
            &mut map,
            &mut errors,
            &self.interner,
        );
        (map, errors)
    }
}

#[test]
fn test_single_binding_last_write_wins() {
    let fx = Fixture::new();
    let x = fx.token("X");
    let (map, errors) = fx.merge(&[fx.int(x, 1), fx.int(x, 2)]);

    assert!(errors.is_empty());
    let record = map.get(&x).unwrap();
    assert_eq!(record.providers.len(), 1);
    assert_eq!(
        record.providers[0].binding,
        Binding::Value(ProviderValue::Int(2))
    );
}

#[test]
fn test_multi_bindings_append() {
    let fx = Fixture::new();
    let t = fx.token("T");
    let (map, errors) = fx.merge(&[
        fx.int(t, 1).multi(),
        fx.int(t, 2).multi(),
        fx.int(t, 3).multi(),
    ]);

    assert!(errors.is_empty());
    let record = map.get(&t).unwrap();
    assert!(record.multi);
    assert_eq!(record.providers.len(), 3);
}

#[test]
fn test_mixing_multi_and_single_is_an_error() {
    let fx = Fixture::new();
    let t = fx.token("T");
    let (map, errors) = fx.merge(&[
        fx.int(t, 1).multi(),
        fx.int(t, 2).multi(),
        fx.int(t, 3).at(Span::new(40, 45)),
    ]);

    assert_eq!(errors.len(), 1);
    let error = &errors.as_slice()[0];
    assert_eq!(error.kind, ProviderErrorKind::MultiBindingConflict { token: t });
    assert_eq!(error.span, Span::new(40, 45));
    assert_eq!(
        error.message,
        "Mixing multi and non multi provider is not possible for token T"
    );
    // the single binding still replaces the earlier ones
    let record = map.get(&t).unwrap();
    assert!(record.multi);
    assert_eq!(record.providers.len(), 1);
    assert_eq!(
        record.providers[0].binding,
        Binding::Value(ProviderValue::Int(3))
    );
}

#[test]
fn test_conflict_without_binding_span_uses_scope_span() {
    let fx = Fixture::new();
    let t = fx.token("T");
    let (_, errors) = fx.merge(&[fx.int(t, 1), fx.int(t, 2).multi()]);
    assert_eq!(errors.as_slice()[0].span, Span::new(0, 10));
}

#[test]
fn test_hooks_make_record_eager() {
    let fx = Fixture::new();
    let a = fx.token("A");
    let b = fx.token("B");
    let (map, _) = fx.merge(&[
        ProviderDescriptor::class(a, fx.ty("A")).with_hooks(LifecycleHooks::ON_DESTROY),
        ProviderDescriptor::class(b, fx.ty("B")),
    ]);

    assert!(map.get(&a).unwrap().eager);
    assert!(!map.get(&b).unwrap().eager);
}

#[test]
fn test_single_replacement_drops_replaced_hooks() {
    let fx = Fixture::new();
    let a = fx.token("A");
    let (map, _) = fx.merge(&[
        ProviderDescriptor::class(a, fx.ty("A")).with_hooks(LifecycleHooks::ON_DESTROY),
        ProviderDescriptor::class(a, fx.ty("OtherA")),
    ]);

    let record = map.get(&a).unwrap();
    assert_eq!(record.hooks, LifecycleHooks::empty());
    assert_eq!(record.providers.len(), 1);
    // Eagerness is never withdrawn.
    assert!(record.eager);
}

#[test]
fn test_multi_append_keeps_hooks() {
    let fx = Fixture::new();
    let a = fx.token("A");
    let (map, _) = fx.merge(&[
        ProviderDescriptor::class(a, fx.ty("A"))
            .with_hooks(LifecycleHooks::ON_DESTROY)
            .multi(),
        ProviderDescriptor::class(a, fx.ty("OtherA")).multi(),
    ]);

    assert_eq!(map.get(&a).unwrap().hooks, LifecycleHooks::ON_DESTROY);
}

#[test]
fn test_merge_is_deterministic() {
    let fx = Fixture::new();
    let [a, b, c] = [fx.token("A"), fx.token("B"), fx.token("C")];
    let input = [fx.int(b, 1), fx.int(a, 2), fx.int(c, 3).multi(), fx.int(b, 4)];

    let (first, _) = fx.merge(&input);
    let (second, _) = fx.merge(&input);

    assert_eq!(first.keys().collect::<Vec<_>>(), vec![b, a, c]);
    assert_eq!(
        first.values().cloned().collect::<Vec<_>>(),
        second.values().cloned().collect::<Vec<_>>()
    );
}

#[test]
fn test_directive_merge_order() {
    let fx = Fixture::new();
    let service = fx.token("Service");
    let hidden = fx.token("Hidden");
    let from_dir = fx.token("FromDir");

    let dir = DirectiveMeta::directive(fx.ty("Dir"))
        .with_providers(vec![fx.int(from_dir, 1), fx.int(service, 1)]);
    let comp = DirectiveMeta::component(fx.ty("Comp"))
        .with_providers(vec![fx.int(service, 2)])
        .with_view_providers(vec![fx.int(hidden, 3)]);
    let renderer = Token::Builtin(Builtin::Renderer);
    let builtins = [ProviderDescriptor::value(renderer, ProviderValue::Null)];

    let mut errors = ErrorList::new();
    let map = merge_directive_providers(
        &[dir, comp],
        &builtins,
        Span::new(0, 5),
        &mut errors,
        &fx.interner,
    );

    assert!(errors.is_empty());
    assert_eq!(
        map.keys().collect::<Vec<_>>(),
        vec![
            fx.token("Dir"),
            fx.token("Comp"),
            service,
            hidden,
            from_dir,
            renderer
        ]
    );

    let kinds: Vec<_> = map.values().map(|r| (r.kind, r.eager)).collect();
    assert_eq!(
        kinds,
        vec![
            (ProviderKind::Directive, true),
            (ProviderKind::Component, true),
            (ProviderKind::PublicService, false),
            (ProviderKind::PrivateService, false),
            (ProviderKind::PublicService, false),
            (ProviderKind::Builtin, false),
        ]
    );

    // the directive, merged after the component, overrides `Service`
    assert_eq!(
        map.get(&service).unwrap().providers[0].binding,
        Binding::Value(ProviderValue::Int(1))
    );
}
