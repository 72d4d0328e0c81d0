//! Dependency lookup within and above an element.

use wire_ir::{
    Binding, Builtin, DependencyRequest, ProviderDescriptor, ProviderValue, Token,
};

use super::{ProviderViewContext, ScopeId};
use crate::error::ProviderError;
use crate::record::{ProviderKind, ResolvedBinding, ResolvedDependency, ResolvedProvider};

impl ProviderViewContext<'_> {
    /// Instantiate `token`'s record at element `id` on behalf of a
    /// `requester` binding.
    ///
    /// Returns `false` if the element has no record for `token`, the record
    /// is hidden from `requester`, or its instantiation is already in
    /// progress (a cycle, which is reported).
    pub(super) fn get_or_create_local_provider(
        &mut self,
        id: ScopeId,
        requester: ProviderKind,
        token: Token,
        eager: bool,
    ) -> bool {
        let node = &mut self.scopes[id.index()];
        let Some(record) = node.all_providers.get(&token) else {
            return false;
        };
        if !requester.can_see(record.kind) {
            return false;
        }
        if node.transformed.contains(&token) {
            return true;
        }
        if !node.seen.insert(token) {
            self.errors.push(ProviderError::cyclic_dependency(
                token,
                node.span,
                self.interner,
            ));
            return false;
        }

        let record = record.clone();
        let eager = eager || record.eager;
        tracing::trace!(token = token.display(self.interner), eager, "instantiating");
        let providers = record
            .providers
            .iter()
            .map(|provider| self.transform_provider(id, record.kind, provider, eager))
            .collect();
        self.scopes[id.index()]
            .transformed
            .insert(token, record.into_resolved(eager, providers));
        true
    }

    fn transform_provider(
        &mut self,
        id: ScopeId,
        kind: ProviderKind,
        provider: &ProviderDescriptor,
        eager: bool,
    ) -> ResolvedProvider {
        let (binding, deps) = match &provider.binding {
            Binding::Existing(existing) => {
                let dep = DependencyRequest::new(*existing);
                let binding = match self.get_dependency(id, kind, &dep, eager) {
                    ResolvedDependency::Token(found) => ResolvedBinding::Existing(found.token),
                    ResolvedDependency::Value(value) => ResolvedBinding::Value(value),
                    ResolvedDependency::Unresolved(_) => ResolvedBinding::Existing(*existing),
                };
                (binding, Vec::new())
            }
            Binding::Class(ty) => (
                ResolvedBinding::Class(ty.clone()),
                self.resolve_deps(id, kind, provider, eager),
            ),
            Binding::Factory(factory) => (
                ResolvedBinding::Factory(factory.clone()),
                self.resolve_deps(id, kind, provider, eager),
            ),
            Binding::Value(value) => (ResolvedBinding::Value(value.clone()), Vec::new()),
        };

        ResolvedProvider {
            token: provider.token,
            multi: provider.multi,
            binding,
            deps,
            span: provider.span,
        }
    }

    fn resolve_deps(
        &mut self,
        id: ScopeId,
        kind: ProviderKind,
        provider: &ProviderDescriptor,
        eager: bool,
    ) -> Vec<ResolvedDependency> {
        provider
            .declared_deps()
            .iter()
            .map(|dep| self.get_dependency(id, kind, dep, eager))
            .collect()
    }

    /// Look up `dep` at element `id` only.
    fn get_local_dependency(
        &mut self,
        id: ScopeId,
        requester: ProviderKind,
        dep: &DependencyRequest,
        eager: bool,
    ) -> Option<ResolvedDependency> {
        if dep.is_attribute() {
            let value = match dep.token {
                Token::Type(name) | Token::Value(name) => {
                    self.scopes[id.index()].attrs.get(&name).copied()
                }
                Token::Builtin(_) => None,
            };
            return Some(ResolvedDependency::Value(
                value.map_or(ProviderValue::Null, ProviderValue::Str),
            ));
        }
        if dep.is_query() {
            return Some(ResolvedDependency::Token(dep.clone()));
        }

        if requester.is_directive_like() {
            match dep.token.builtin() {
                Some(builtin) if builtin.is_element_handle() => {
                    return Some(ResolvedDependency::Token(dep.clone()));
                }
                Some(Builtin::ViewContainerRef) => {
                    self.scopes[id.index()].has_view_container = true;
                }
                _ => {}
            }
        }

        if dep.token.is(Builtin::Injector)
            || self.get_or_create_local_provider(id, requester, dep.token, eager)
        {
            return Some(ResolvedDependency::Token(dep.clone()));
        }
        None
    }

    /// Look up `dep` for a `requester` binding declared at element `id`.
    ///
    /// Unless restricted to `self`, the lookup continues through the
    /// ancestors, which only expose their public bindings. Leaving a view
    /// root turns off eager instantiation. What no element provides is
    /// deferred to the view's host injector, except for `host` requests,
    /// which must be satisfied within the component's own view.
    pub(super) fn get_dependency(
        &mut self,
        id: ScopeId,
        requester: ProviderKind,
        dep: &DependencyRequest,
        eager: bool,
    ) -> ResolvedDependency {
        let mut result = None;
        if !dep.is_skip_self() {
            result = self.get_local_dependency(id, requester, dep, eager);
        }

        if dep.is_self() {
            if result.is_none() && dep.is_optional() {
                result = Some(ResolvedDependency::Value(ProviderValue::Null));
            }
        } else {
            let mut current = id;
            let mut eager = eager;
            while result.is_none() {
                let node = &self.scopes[current.index()];
                let Some(parent) = node.parent else {
                    break;
                };
                if node.is_view_root {
                    eager = false;
                }
                current = parent;
                result = self.get_local_dependency(parent, ProviderKind::PublicService, dep, eager);
            }

            if result.is_none() {
                if !dep.is_host()
                    || self.component.is_host
                    || self.component.token() == dep.token
                    || self.view_providers.contains(&dep.token)
                {
                    result = Some(ResolvedDependency::Token(dep.clone()));
                } else if dep.is_optional() {
                    result = Some(ResolvedDependency::Value(ProviderValue::Null));
                }
            }
        }

        result.unwrap_or_else(|| {
            let span = self.scopes[id.index()].span;
            self.errors
                .push(ProviderError::no_provider(dep.token, span, self.interner));
            ResolvedDependency::Unresolved(dep.clone())
        })
    }
}
