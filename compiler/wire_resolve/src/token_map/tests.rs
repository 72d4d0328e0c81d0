use super::*;
use pretty_assertions::assert_eq;
use wire_ir::{Builtin, StringInterner};

#[test]
fn test_insertion_order_survives_replace() {
    let interner = StringInterner::new();
    let a = Token::Type(interner.intern("A"));
    let b = Token::Type(interner.intern("B"));

    let mut map = TokenMap::new();
    map.insert(a, 1);
    map.insert(b, 2);
    map.insert(a, 3);

    assert_eq!(map.iter().collect::<Vec<_>>(), vec![(a, &3), (b, &2)]);
    assert_eq!(map.position(&b), Some(1));
    assert_eq!(map.len(), 2);
}

#[test]
fn test_get_or_insert_with() {
    let mut map: TokenMap<Vec<u32>> = TokenMap::new();
    let token = Token::Builtin(Builtin::ElementRef);
    map.get_or_insert_with(token, Vec::new).push(1);
    map.get_or_insert_with(token, Vec::new).push(2);
    assert_eq!(map.get(&token), Some(&vec![1, 2]));
    assert!(map.contains(&token));
    assert!(!map.contains(&Token::Builtin(Builtin::TemplateRef)));
}
