//! Element-scope resolution.
//!
//! One [`ProviderViewContext`] covers one component view. Elements are
//! entered in document order; each gets a scope holding the records merged
//! from its directives. Dependencies resolve against the element itself,
//! then against its ancestors, and finally fall through to the injector
//! that hosts the view.
//!
//! # Lifecycle
//!
//! ```text
//! enter_element()  ← merge, index queries, instantiate eager records
//!     ↓
//! (children entered and finished)
//!     ↓
//! after_element()  ← instantiate the remaining records lazily
//!     ↓
//! element_providers()
//! ```
//!
//! Children are resolved while their ancestors are still open, so a child
//! can force an ancestor's record to be instantiated eagerly. That
//! propagation stops at view boundaries.

use rustc_hash::{FxHashMap, FxHashSet};
use wire_ir::{Builtin, DirectiveMeta, ElementFacts, Name, Span, StringInterner, Token};

use crate::config::ResolveConfig;
use crate::error::{ErrorList, ProviderError};
use crate::merge::{merge_directive_providers, ProviderMap};
use crate::query::{collect_matches, QueryIndex, QueryMatch};
use crate::record::{instantiation_order, ProviderKind, ResolvedRecord};
use crate::token_map::TokenMap;

mod lookup;

/// Index of an entered element within its [`ProviderViewContext`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ScopeId(u32);

impl ScopeId {
    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-element resolution state.
struct ScopeNode {
    parent: Option<ScopeId>,
    is_view_root: bool,
    span: Span,
    directives: Vec<DirectiveMeta>,
    attrs: FxHashMap<Name, Name>,
    all_providers: ProviderMap,
    content_queries: QueryIndex,
    /// Tokens some query reads at this element, with the matches.
    queried_tokens: TokenMap<Vec<QueryMatch>>,
    transformed: TokenMap<ResolvedRecord>,
    seen: FxHashSet<Token>,
    has_view_container: bool,
}

impl ScopeNode {
    fn has_directives(&self) -> bool {
        !self.directives.is_empty()
    }
}

/// Resolution results for one element.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ElementProviders {
    /// Resolved records, lazy first, then eager.
    pub providers: Vec<ResolvedRecord>,
    /// Directives reordered to follow their instantiation order.
    pub directives: Vec<DirectiveMeta>,
    /// Whether anything at the element needs a view container.
    pub has_view_container: bool,
    pub query_matches: Vec<QueryMatch>,
}

/// Resolution state of one component view.
pub struct ProviderViewContext<'a> {
    interner: &'a StringInterner,
    component: &'a DirectiveMeta,
    view_queries: QueryIndex,
    /// Tokens of the component's `viewProviders`.
    view_providers: FxHashSet<Token>,
    next_query_id: u32,
    scopes: Vec<ScopeNode>,
    errors: ErrorList,
}

impl<'a> ProviderViewContext<'a> {
    pub fn new(
        component: &'a DirectiveMeta,
        interner: &'a StringInterner,
        config: &ResolveConfig,
    ) -> Self {
        let mut next_query_id = 1;
        let view_queries = QueryIndex::view(component, &mut next_query_id);
        let view_providers = component.view_providers.iter().map(|p| p.token).collect();

        ProviderViewContext {
            interner,
            component,
            view_queries,
            view_providers,
            next_query_id,
            scopes: Vec::new(),
            errors: ErrorList::with_limit(config.error_limit),
        }
    }

    /// Open a scope for an element.
    ///
    /// `parent` should be an element entered earlier and not yet finished.
    /// An id this context did not hand out is treated as no parent.
    #[tracing::instrument(level = "debug", skip_all, fields(
        directives = facts.directives.len(),
        span = %facts.span,
    ))]
    pub fn enter_element(&mut self, parent: Option<ScopeId>, facts: &ElementFacts) -> ScopeId {
        let parent = parent.filter(|p| p.index() < self.scopes.len());
        let all_providers = merge_directive_providers(
            &facts.directives,
            &facts.builtin_providers,
            facts.span,
            &mut self.errors,
            self.interner,
        );
        let content_queries = QueryIndex::content(&facts.directives, &mut self.next_query_id);

        let id = ScopeId(u32::try_from(self.scopes.len()).unwrap_or(u32::MAX));
        self.scopes.push(ScopeNode {
            parent,
            is_view_root: facts.is_view_root,
            span: facts.span,
            directives: facts.directives.clone(),
            attrs: facts.attrs.iter().map(|a| (a.name, a.value)).collect(),
            all_providers,
            content_queries,
            queried_tokens: TokenMap::new(),
            transformed: TokenMap::new(),
            seen: FxHashSet::default(),
            has_view_container: false,
        });

        let provided: Vec<Token> = self.scopes[id.index()].all_providers.keys().collect();
        for token in provided {
            self.add_query_reads(id, token, token);
        }
        if facts.is_template {
            let template_ref = Token::Builtin(Builtin::TemplateRef);
            self.add_query_reads(id, template_ref, template_ref);
        }
        for reference in &facts.refs {
            let default_read = reference
                .value
                .unwrap_or(Token::Builtin(Builtin::ElementRef));
            self.add_query_reads(id, Token::Value(reference.name), default_read);
        }

        let node = &mut self.scopes[id.index()];
        if node
            .queried_tokens
            .contains(&Token::Builtin(Builtin::ViewContainerRef))
        {
            node.has_view_container = true;
        }

        let eager: Vec<(Token, ProviderKind)> = node
            .all_providers
            .iter()
            .filter(|(token, record)| record.eager || node.queried_tokens.contains(token))
            .map(|(token, record)| (token, record.kind))
            .collect();
        for (token, kind) in eager {
            self.get_or_create_local_provider(id, kind, token, true);
        }

        id
    }

    /// Finish an element after all its children: instantiate every record
    /// not yet instantiated, lazily.
    ///
    /// Does nothing for an id this context did not hand out.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn after_element(&mut self, id: ScopeId) {
        let Some(node) = self.scopes.get(id.index()) else {
            return;
        };
        let pending: Vec<(Token, ProviderKind)> = node
            .all_providers
            .iter()
            .map(|(token, record)| (token, record.kind))
            .collect();
        for (token, kind) in pending {
            self.get_or_create_local_provider(id, kind, token, false);
        }
    }

    /// Results for a finished element, or `None` for an id this context did
    /// not hand out.
    pub fn element_providers(&self, id: ScopeId) -> Option<ElementProviders> {
        let node = self.scopes.get(id.index())?;
        let providers = instantiation_order(node.transformed.values().cloned());

        let mut directives = node.directives.clone();
        directives.sort_by_key(|d| {
            let token = d.token();
            providers.iter().position(|r| r.token == token)
        });

        Some(ElementProviders {
            providers,
            directives,
            has_view_container: node.has_view_container,
            query_matches: node.queried_tokens.values().flatten().copied().collect(),
        })
    }

    /// Errors reported so far, across all elements of the view.
    pub fn errors(&self) -> &[ProviderError] {
        self.errors.as_slice()
    }

    pub fn into_errors(self) -> ErrorList {
        self.errors
    }

    fn add_query_reads(&mut self, id: ScopeId, token: Token, default_read: Token) {
        let chain = self
            .ancestors(id)
            .map(|node| (&node.content_queries, node.has_directives()));
        let matches = collect_matches(chain, &self.view_queries, token, default_read);

        let node = &mut self.scopes[id.index()];
        for found in matches {
            node.queried_tokens
                .get_or_insert_with(found.value, Vec::new)
                .push(found);
        }
    }

    /// `id` and its ancestors, innermost first.
    fn ancestors(&self, id: ScopeId) -> impl Iterator<Item = &ScopeNode> {
        std::iter::successors(Some(&self.scopes[id.index()]), move |node| {
            node.parent.map(|parent| &self.scopes[parent.index()])
        })
    }
}
