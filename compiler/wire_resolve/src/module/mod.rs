//! Module-scope resolution.
//!
//! A module scope is flat: the module's own type, every transitively
//! imported module type, and every transitively collected provider share
//! one record map. Resolution instantiates each record in declaration
//! order and checks that every dependency is satisfiable within the scope.
//!
//! # Architecture
//!
//! ```text
//! ModuleMeta + extra providers
//!     ↓
//! merge (module self-bindings eager, providers lazy)
//!     ↓
//! parse() ← instantiates each record, memoized, with cycle detection
//!     ↓
//! Vec<ResolvedRecord> (lazy first, then eager) or ModuleResolveError
//! ```

use rustc_hash::FxHashSet;
use wire_ir::{
    Binding, Builtin, DependencyRequest, ModuleMeta, ProviderDescriptor, ProviderValue, Span,
    StringInterner, Token,
};

use crate::config::ResolveConfig;
use crate::error::{ErrorList, ModuleResolveError, ProviderError};
use crate::merge::{merge_providers, MergeScope, ProviderMap};
use crate::record::{
    instantiation_order, ProviderKind, ResolvedBinding, ResolvedDependency, ResolvedProvider,
    ResolvedRecord,
};
use crate::token_map::TokenMap;

/// Resolver for one module scope.
pub struct ModuleProviderAnalyzer<'a> {
    interner: &'a StringInterner,
    all_providers: ProviderMap,
    transformed: TokenMap<ResolvedRecord>,
    /// Tokens whose instantiation has started.
    seen: FxHashSet<Token>,
    errors: ErrorList,
}

impl<'a> ModuleProviderAnalyzer<'a> {
    /// Build the module's record map.
    ///
    /// `extra` providers are merged after the module's own, so they
    /// override single bindings of the same token.
    pub fn new(
        module: &ModuleMeta,
        extra: &[ProviderDescriptor],
        interner: &'a StringInterner,
        config: &ResolveConfig,
    ) -> Self {
        let mut all_providers = ProviderMap::new();
        let mut errors = ErrorList::with_limit(config.error_limit);
        let span = module.span;

        let module_self_bindings: Vec<_> = module
            .transitive_modules
            .iter()
            .map(|ty| ty.self_binding(span))
            .collect();
        merge_providers(
            &module_self_bindings,
            MergeScope::new(ProviderKind::PublicService, true, span).module(),
            &mut all_providers,
            &mut errors,
            interner,
        );

        let service_scope = MergeScope::new(ProviderKind::PublicService, false, span);
        merge_providers(
            &module.transitive_providers,
            service_scope,
            &mut all_providers,
            &mut errors,
            interner,
        );
        merge_providers(extra, service_scope, &mut all_providers, &mut errors, interner);

        ModuleProviderAnalyzer {
            interner,
            all_providers,
            transformed: TokenMap::new(),
            seen: FxHashSet::default(),
            errors,
        }
    }

    /// Resolve every record.
    ///
    /// Fails with all collected errors if any occurred, including errors
    /// from building the record map.
    #[tracing::instrument(level = "debug", skip_all, fields(records = self.all_providers.len()))]
    pub fn parse(mut self) -> Result<Vec<ResolvedRecord>, ModuleResolveError> {
        let pending: Vec<(Token, bool)> = self
            .all_providers
            .iter()
            .map(|(token, record)| (token, record.eager))
            .collect();
        for (token, eager) in pending {
            self.get_or_create_local_provider(token, eager);
        }

        if !self.errors.is_empty() {
            return Err(ModuleResolveError::Providers {
                errors: self.errors,
            });
        }
        Ok(instantiation_order(self.transformed.into_values()))
    }

    /// Instantiate `token`'s record if needed.
    ///
    /// Returns `false` if the scope has no record for `token`, or if its
    /// instantiation is already in progress (a cycle, which is reported).
    fn get_or_create_local_provider(&mut self, token: Token, eager: bool) -> bool {
        let Some(record) = self.all_providers.get(&token) else {
            return false;
        };
        if self.transformed.contains(&token) {
            return true;
        }
        if !self.seen.insert(token) {
            self.errors.push(ProviderError::cyclic_dependency(
                token,
                record.span,
                self.interner,
            ));
            return false;
        }

        let record = record.clone();
        // Merged eagerness is a floor; a lazy requester cannot downgrade it.
        let eager = eager || record.eager;
        tracing::trace!(token = token.display(self.interner), eager, "instantiating");
        let providers = record
            .providers
            .iter()
            .map(|provider| self.transform_provider(provider, record.span, eager))
            .collect();
        self.transformed
            .insert(token, record.into_resolved(eager, providers));
        true
    }

    fn transform_provider(
        &mut self,
        provider: &ProviderDescriptor,
        span: Span,
        eager: bool,
    ) -> ResolvedProvider {
        let (binding, deps) = match &provider.binding {
            Binding::Existing(existing) => {
                let dep = DependencyRequest::new(*existing);
                let binding = match self.get_dependency(&dep, span, eager) {
                    ResolvedDependency::Token(found) => ResolvedBinding::Existing(found.token),
                    ResolvedDependency::Value(value) => ResolvedBinding::Value(value),
                    ResolvedDependency::Unresolved(_) => ResolvedBinding::Existing(*existing),
                };
                (binding, Vec::new())
            }
            Binding::Class(ty) => (
                ResolvedBinding::Class(ty.clone()),
                self.resolve_deps(provider, span, eager),
            ),
            Binding::Factory(factory) => (
                ResolvedBinding::Factory(factory.clone()),
                self.resolve_deps(provider, span, eager),
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
        provider: &ProviderDescriptor,
        span: Span,
        eager: bool,
    ) -> Vec<ResolvedDependency> {
        provider
            .declared_deps()
            .iter()
            .map(|dep| self.get_dependency(dep, span, eager))
            .collect()
    }

    /// Look up one dependency. `self`/`skipSelf` don't apply: the scope is
    /// flat.
    fn get_dependency(
        &mut self,
        dep: &DependencyRequest,
        span: Span,
        eager: bool,
    ) -> ResolvedDependency {
        if dep.is_query()
            || dep.token.is(Builtin::Injector)
            || dep.token.is(Builtin::ComponentFactoryResolver)
            || self.get_or_create_local_provider(dep.token, eager)
        {
            return ResolvedDependency::Token(dep.clone());
        }
        if dep.is_optional() {
            return ResolvedDependency::Value(ProviderValue::Null);
        }
        self.errors
            .push(ProviderError::no_provider(dep.token, span, self.interner));
        ResolvedDependency::Unresolved(dep.clone())
    }
}
