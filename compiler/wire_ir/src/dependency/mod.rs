//! Dependency requests and their lookup modifiers.

use bitflags::bitflags;

use crate::{QueryMeta, Token};

bitflags! {
    /// Lookup modifiers attached to a dependency request.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct DepFlags: u8 {
        /// Missing dependency resolves to a null value instead of an error.
        const OPTIONAL = 1 << 0;
        /// Only the requesting scope is searched.
        const SELF = 1 << 1;
        /// The requesting scope is skipped; lookup starts at the parent.
        const SKIP_SELF = 1 << 2;
        /// Lookup stops at the host boundary of the enclosing component.
        const HOST = 1 << 3;
        /// The token names a static attribute of the host element.
        const ATTRIBUTE = 1 << 4;
    }
}

/// A request for a dependency.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DependencyRequest {
    /// Token to resolve.
    pub token: Token,
    /// Lookup modifiers.
    pub flags: DepFlags,
    /// Request for a content-query result rather than a provided value.
    pub query: Option<QueryMeta>,
    /// Request for a view-query result rather than a provided value.
    pub view_query: Option<QueryMeta>,
}

impl DependencyRequest {
    /// Plain request with no modifiers.
    pub fn new(token: Token) -> Self {
        DependencyRequest {
            token,
            flags: DepFlags::empty(),
            query: None,
            view_query: None,
        }
    }

    /// Add modifier flags.
    #[must_use]
    pub fn with_flags(mut self, flags: DepFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Turn this into a content-query request.
    #[must_use]
    pub fn with_query(mut self, query: QueryMeta) -> Self {
        self.query = Some(query);
        self
    }

    /// Turn this into a view-query request.
    #[must_use]
    pub fn with_view_query(mut self, query: QueryMeta) -> Self {
        self.view_query = Some(query);
        self
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        self.flags.contains(DepFlags::OPTIONAL)
    }

    #[inline]
    pub fn is_self(&self) -> bool {
        self.flags.contains(DepFlags::SELF)
    }

    #[inline]
    pub fn is_skip_self(&self) -> bool {
        self.flags.contains(DepFlags::SKIP_SELF)
    }

    #[inline]
    pub fn is_host(&self) -> bool {
        self.flags.contains(DepFlags::HOST)
    }

    #[inline]
    pub fn is_attribute(&self) -> bool {
        self.flags.contains(DepFlags::ATTRIBUTE)
    }

    /// Whether this asks for a query result instead of a provided value.
    #[inline]
    pub fn is_query(&self) -> bool {
        self.query.is_some() || self.view_query.is_some()
    }
}

#[cfg(test)]
mod tests;
