//! Query index: which queries a provided token would satisfy.
//!
//! Queries are numbered per view. The component's view queries take ids
//! `1..=n`; content queries continue from `n + 1` in the order their
//! elements are entered.

use rustc_hash::FxHashMap;
use wire_ir::{DirectiveMeta, QueryMeta, Token};

/// A query with its view-unique id.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QueryWithId {
    pub id: u32,
    pub meta: QueryMeta,
}

/// A query satisfied at an element, and what it reads there.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct QueryMatch {
    pub query_id: u32,
    /// The query's `read` token, or the matched token itself.
    pub value: Token,
}

/// Queries indexed by selector token.
#[derive(Clone, Debug, Default)]
pub struct QueryIndex {
    by_token: FxHashMap<Token, Vec<QueryWithId>>,
}

impl QueryIndex {
    /// Index the component's view queries, numbering them from `*next_id`
    /// and advancing it.
    pub fn view(component: &DirectiveMeta, next_id: &mut u32) -> Self {
        let mut index = QueryIndex::default();
        index.add_all(&component.view_queries, next_id);
        index
    }

    /// Index the content queries of an element's directives, numbering them
    /// from `*next_id` and advancing it.
    pub fn content(directives: &[DirectiveMeta], next_id: &mut u32) -> Self {
        let mut index = QueryIndex::default();
        for directive in directives {
            index.add_all(&directive.queries, next_id);
        }
        index
    }

    fn add_all(&mut self, queries: &[QueryMeta], next_id: &mut u32) {
        for meta in queries {
            let query = QueryWithId {
                id: *next_id,
                meta: meta.clone(),
            };
            *next_id += 1;
            for selector in &meta.selectors {
                self.by_token
                    .entry(*selector)
                    .or_default()
                    .push(query.clone());
            }
        }
    }

    /// Queries selecting `token`.
    pub fn get(&self, token: Token) -> &[QueryWithId] {
        self.by_token.get(&token).map_or(&[], Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.by_token.is_empty()
    }
}

/// Collect the matches of `token` provided at an element.
///
/// `chain` walks from the element to the view root, yielding each element's
/// content queries and whether it hosts any directive. A content query
/// matches if it wants all descendants, or sits at most one directive-bearing
/// element away. View queries match regardless of depth.
pub fn collect_matches<'q>(
    chain: impl IntoIterator<Item = (&'q QueryIndex, bool)>,
    view: &QueryIndex,
    token: Token,
    default_read: Token,
) -> Vec<QueryMatch> {
    let to_match = |query: &QueryWithId| QueryMatch {
        query_id: query.id,
        value: query.meta.read.unwrap_or(default_read),
    };

    let mut matches = Vec::new();
    let mut distance = 0u32;
    for (content, has_directives) in chain {
        matches.extend(
            content
                .get(token)
                .iter()
                .filter(|q| q.meta.descendants || distance <= 1)
                .map(to_match),
        );
        if has_directives {
            distance += 1;
        }
    }
    matches.extend(view.get(token).iter().map(to_match));
    matches
}
