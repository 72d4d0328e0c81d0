//! Whole-view resolution.
//!
//! Drives a [`ProviderViewContext`] over a [`TemplateTree`] depth first:
//! each element is entered before its children and finished after them.

use wire_diagnostic::{Diagnostic, DiagnosticConfig};
use wire_ir::{DirectiveMeta, ElementId, StringInterner, TemplateTree};

use crate::config::ResolveConfig;
use crate::element::{ElementProviders, ProviderViewContext, ScopeId};
use crate::error::{ErrorList, ProviderError};

/// Resolution results for every element of one view.
#[derive(Clone, Debug)]
pub struct ViewProviders {
    /// Indexed by [`ElementId`].
    elements: Vec<ElementProviders>,
    errors: ErrorList,
}

impl ViewProviders {
    pub fn element(&self, id: ElementId) -> Option<&ElementProviders> {
        self.elements.get(id.index())
    }

    pub fn elements(&self) -> &[ElementProviders] {
        &self.elements
    }

    /// All errors of the view, in report order.
    pub fn errors(&self) -> &[ProviderError] {
        self.errors.as_slice()
    }

    /// Errors discarded because `ResolveConfig::error_limit` was reached.
    pub fn dropped(&self) -> usize {
        self.errors.dropped()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Render the view's errors against its template source.
    pub fn diagnostics(&self, source: &str, config: DiagnosticConfig) -> Vec<Diagnostic> {
        self.errors.diagnostics(source, config)
    }
}

/// Resolve the providers of every element in `component`'s view.
#[tracing::instrument(level = "debug", skip_all, fields(
    component = interner.lookup(component.ty.name),
    elements = tree.len(),
))]
pub fn resolve_view(
    component: &DirectiveMeta,
    tree: &TemplateTree,
    interner: &StringInterner,
    config: &ResolveConfig,
) -> ViewProviders {
    let mut ctx = ProviderViewContext::new(component, interner, config);
    let mut finished = Vec::with_capacity(tree.len());
    for &root in tree.roots() {
        visit(&mut ctx, tree, root, None, &mut finished);
    }

    finished.sort_by_key(|(element, _)| element.index());
    let elements = finished
        .into_iter()
        .filter_map(|(_, scope)| ctx.element_providers(scope))
        .collect();

    ViewProviders {
        elements,
        errors: ctx.into_errors(),
    }
}

fn visit(
    ctx: &mut ProviderViewContext<'_>,
    tree: &TemplateTree,
    element: ElementId,
    parent: Option<ScopeId>,
    finished: &mut Vec<(ElementId, ScopeId)>,
) {
    let scope = ctx.enter_element(parent, tree.facts(element));
    for &child in tree.children(element) {
        visit(ctx, tree, child, Some(scope), finished);
    }
    ctx.after_element(scope);
    finished.push((element, scope));
}
