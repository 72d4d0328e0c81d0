use super::*;
use crate::StringInterner;

#[test]
fn test_template_tree_structure() {
    let mut tree = TemplateTree::new();
    let root = tree.add_root(ElementFacts::new(Span::new(0, 40)).view_root());
    let a = tree.add_child(root, ElementFacts::new(Span::new(5, 15)));
    let b = tree.add_child(root, ElementFacts::new(Span::new(16, 30)));
    let inner = tree.add_child(a, ElementFacts::new(Span::new(8, 12)));

    assert_eq!(tree.len(), 4);
    assert_eq!(tree.roots(), &[root]);
    assert_eq!(tree.children(root), &[a, b]);
    assert_eq!(tree.children(a), &[inner]);
    assert!(tree.children(b).is_empty());
    assert!(tree.facts(root).is_view_root);
    assert_eq!(tree.facts(inner).span, Span::new(8, 12));
}

#[test]
fn test_directive_builders() {
    let interner = StringInterner::new();
    let cmp = DirectiveMeta::component(TypeRef::new(interner.intern("App"))).host();
    assert!(cmp.is_component);
    assert!(cmp.is_host);
    assert_eq!(cmp.token(), Token::Type(interner.intern("App")));

    let dir = DirectiveMeta::directive(TypeRef::new(interner.intern("Tooltip")));
    assert!(!dir.is_component);
    assert!(!dir.is_host);
}

#[test]
fn test_element_facts_builders() {
    let interner = StringInterner::new();
    let facts = ElementFacts::new(Span::new(1, 2))
        .with_attr(interner.intern("title"), interner.intern("hello"))
        .with_ref(interner.intern("box"), None)
        .template();
    assert_eq!(facts.attrs.len(), 1);
    assert_eq!(facts.refs[0].value, None);
    assert!(facts.is_template);
    assert!(!facts.is_view_root);
}
