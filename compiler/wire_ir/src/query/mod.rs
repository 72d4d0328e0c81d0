//! Query declarations.

use crate::Token;

/// A content or view query declaration.
///
/// A query matches an element scope when one of its `selectors` is provided
/// there (or names a reference declared there). What it then reads is the
/// `read` token when given, otherwise the matched value itself.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct QueryMeta {
    /// Tokens the query matches.
    pub selectors: Vec<Token>,
    /// Match at any depth, or only the direct content of the declaring element.
    pub descendants: bool,
    /// What to read when a selector matches.
    pub read: Option<Token>,
}

impl QueryMeta {
    /// Shallow query over `selectors` without a `read` override.
    pub fn new(selectors: Vec<Token>) -> Self {
        QueryMeta {
            selectors,
            descendants: false,
            read: None,
        }
    }

    #[must_use]
    pub fn descendants(mut self) -> Self {
        self.descendants = true;
        self
    }

    #[must_use]
    pub fn with_read(mut self, read: Token) -> Self {
        self.read = Some(read);
        self
    }
}
