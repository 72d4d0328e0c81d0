//! Insertion-ordered map keyed by [`Token`].
//!
//! Resolution output order is observable (providers are instantiated in the
//! order they were first declared), so scope maps must iterate in insertion
//! order. Replacing a value keeps its original position.

use rustc_hash::FxHashMap;
use wire_ir::Token;

#[derive(Clone, Debug)]
pub struct TokenMap<V> {
    index: FxHashMap<Token, usize>,
    entries: Vec<(Token, V)>,
}

impl<V> Default for TokenMap<V> {
    fn default() -> Self {
        TokenMap {
            index: FxHashMap::default(),
            entries: Vec::new(),
        }
    }
}

impl<V> TokenMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, token: &Token) -> Option<&V> {
        self.index.get(token).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, token: &Token) -> Option<&mut V> {
        self.index.get(token).map(|&i| &mut self.entries[i].1)
    }

    pub fn contains(&self, token: &Token) -> bool {
        self.index.contains_key(token)
    }

    /// Position of `token` in insertion order.
    pub fn position(&self, token: &Token) -> Option<usize> {
        self.index.get(token).copied()
    }

    /// Insert or replace. A replaced value keeps its position.
    pub fn insert(&mut self, token: Token, value: V) {
        match self.index.get(&token) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(token, self.entries.len());
                self.entries.push((token, value));
            }
        }
    }

    pub fn get_or_insert_with(&mut self, token: Token, make: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(&token) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(token, i);
                self.entries.push((token, make()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn keys(&self) -> impl Iterator<Item = Token> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Token, &V)> {
        self.entries.iter().map(|(token, value)| (*token, value))
    }

    pub fn into_values(self) -> impl Iterator<Item = V> {
        self.entries.into_iter().map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests;
