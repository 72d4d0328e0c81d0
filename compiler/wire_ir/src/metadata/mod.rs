//! Input metadata handed over by the metadata and template collaborators.
//!
//! - [`DirectiveMeta`]: one directive or component type
//! - [`ModuleMeta`]: one module with its transitive imports
//! - [`ElementFacts`]: structural facts about one template element
//! - [`TemplateTree`]: the element tree of one component view

use crate::{Name, ProviderDescriptor, QueryMeta, Span, Token, TypeRef};

/// Directive or component metadata.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DirectiveMeta {
    /// The directive type, with its constructor dependencies.
    pub ty: TypeRef,
    /// Components own a view; plain directives don't.
    pub is_component: bool,
    /// Host components are the synthetic roots of bootstrapped views.
    pub is_host: bool,
    /// Bindings visible to the element and its content.
    pub providers: Vec<ProviderDescriptor>,
    /// Bindings visible only inside the component's own view.
    pub view_providers: Vec<ProviderDescriptor>,
    /// Content queries.
    pub queries: Vec<QueryMeta>,
    /// View queries (components only).
    pub view_queries: Vec<QueryMeta>,
}

impl DirectiveMeta {
    fn new(ty: TypeRef, is_component: bool) -> Self {
        DirectiveMeta {
            ty,
            is_component,
            is_host: false,
            providers: Vec::new(),
            view_providers: Vec::new(),
            queries: Vec::new(),
            view_queries: Vec::new(),
        }
    }

    pub fn directive(ty: TypeRef) -> Self {
        Self::new(ty, false)
    }

    pub fn component(ty: TypeRef) -> Self {
        Self::new(ty, true)
    }

    #[must_use]
    pub fn host(mut self) -> Self {
        self.is_host = true;
        self
    }

    #[must_use]
    pub fn with_providers(mut self, providers: Vec<ProviderDescriptor>) -> Self {
        self.providers = providers;
        self
    }

    #[must_use]
    pub fn with_view_providers(mut self, providers: Vec<ProviderDescriptor>) -> Self {
        self.view_providers = providers;
        self
    }

    #[must_use]
    pub fn with_queries(mut self, queries: Vec<QueryMeta>) -> Self {
        self.queries = queries;
        self
    }

    #[must_use]
    pub fn with_view_queries(mut self, queries: Vec<QueryMeta>) -> Self {
        self.view_queries = queries;
        self
    }

    #[inline]
    pub fn token(&self) -> Token {
        self.ty.token()
    }
}

/// Module metadata, already expanded over its transitive imports.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ModuleMeta {
    /// The module's own type.
    pub ty: TypeRef,
    /// Every module reachable through imports, including this one.
    pub transitive_modules: Vec<TypeRef>,
    /// Providers declared by every transitive module, in import order.
    pub transitive_providers: Vec<ProviderDescriptor>,
    /// Module declaration.
    pub span: Span,
}

/// A static attribute on a template element.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Attribute {
    pub name: Name,
    pub value: Name,
}

/// A template reference (`#ref` / `#ref="exportAs"`).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Reference {
    pub name: Name,
    /// Directive the reference points at; `None` means the element itself.
    pub value: Option<Token>,
}

/// Structural facts about one template element.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ElementFacts {
    /// Directives matched on the element, in match order.
    pub directives: Vec<DirectiveMeta>,
    pub attrs: Vec<Attribute>,
    pub refs: Vec<Reference>,
    /// `<ng-template>`-like element that yields a template handle.
    pub is_template: bool,
    /// First element of a view (component root or embedded template root).
    pub is_view_root: bool,
    /// Extra bindings of kind `Builtin` supplied by the host element.
    pub builtin_providers: Vec<ProviderDescriptor>,
    pub span: Span,
}

impl ElementFacts {
    pub fn new(span: Span) -> Self {
        ElementFacts {
            span,
            ..ElementFacts::default()
        }
    }

    #[must_use]
    pub fn with_directive(mut self, directive: DirectiveMeta) -> Self {
        self.directives.push(directive);
        self
    }

    #[must_use]
    pub fn with_attr(mut self, name: Name, value: Name) -> Self {
        self.attrs.push(Attribute { name, value });
        self
    }

    #[must_use]
    pub fn with_ref(mut self, name: Name, value: Option<Token>) -> Self {
        self.refs.push(Reference { name, value });
        self
    }

    #[must_use]
    pub fn template(mut self) -> Self {
        self.is_template = true;
        self
    }

    #[must_use]
    pub fn view_root(mut self) -> Self {
        self.is_view_root = true;
        self
    }

    #[must_use]
    pub fn with_builtin_providers(mut self, providers: Vec<ProviderDescriptor>) -> Self {
        self.builtin_providers = providers;
        self
    }
}

/// Index of an element in a [`TemplateTree`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ElementId(u32);

impl ElementId {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct TemplateNode {
    facts: ElementFacts,
    children: Vec<ElementId>,
}

/// The element tree of one component view.
///
/// Elements are stored flat; children are listed by id in document order.
#[derive(Clone, Debug, Default)]
pub struct TemplateTree {
    nodes: Vec<TemplateNode>,
    roots: Vec<ElementId>,
}

impl TemplateTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&mut self, facts: ElementFacts) -> ElementId {
        let id = ElementId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(TemplateNode {
            facts,
            children: Vec::new(),
        });
        id
    }

    /// Add a top-level element.
    pub fn add_root(&mut self, facts: ElementFacts) -> ElementId {
        let id = self.alloc(facts);
        self.roots.push(id);
        id
    }

    /// Add `facts` as the last child of `parent`.
    pub fn add_child(&mut self, parent: ElementId, facts: ElementFacts) -> ElementId {
        let id = self.alloc(facts);
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn roots(&self) -> &[ElementId] {
        &self.roots
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        &self.nodes[id.index()].children
    }

    pub fn facts(&self, id: ElementId) -> &ElementFacts {
        &self.nodes[id.index()].facts
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests;
