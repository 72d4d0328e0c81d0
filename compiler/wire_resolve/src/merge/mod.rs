//! Merge pass: fold normalized descriptors into per-token records.
//!
//! # Rules
//!
//! - The first binding of a token creates its record and fixes its kind.
//! - A later single binding replaces all earlier ones (last write wins),
//!   along with their lifecycle hooks.
//! - A later multi binding appends.
//! - Mixing multi and single bindings for one token is an error. Merging
//!   still goes on by the rules above, and the record keeps the `multi`
//!   flag of its first binding.
//! - A record is eager if any binding merged into it, replaced or not, is
//!   eager by default or declares lifecycle hooks.

use wire_ir::{DirectiveMeta, LifecycleHooks, ProviderDescriptor, Span, StringInterner};

use crate::error::{ErrorList, ProviderError};
use crate::record::{ProviderKind, ProviderRecord};
use crate::token_map::TokenMap;

/// Records of one scope, in first-declaration order.
pub type ProviderMap = TokenMap<ProviderRecord>;

/// Classification shared by all bindings merged in one call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MergeScope {
    pub kind: ProviderKind,
    /// Eager unless proven lazy.
    pub eager: bool,
    pub is_module: bool,
    /// Location of the declaring scope (element or module).
    pub span: Span,
}

impl MergeScope {
    pub fn new(kind: ProviderKind, eager: bool, span: Span) -> Self {
        MergeScope {
            kind,
            eager,
            is_module: false,
            span,
        }
    }

    #[must_use]
    pub fn module(mut self) -> Self {
        self.is_module = true;
        self
    }
}

/// Merge `providers` into `map`.
pub fn merge_providers(
    providers: &[ProviderDescriptor],
    scope: MergeScope,
    map: &mut ProviderMap,
    errors: &mut ErrorList,
    interner: &StringInterner,
) {
    for provider in providers {
        let eager = scope.eager || !provider.hooks.is_empty();
        let Some(record) = map.get_mut(&provider.token) else {
            map.insert(
                provider.token,
                ProviderRecord {
                    token: provider.token,
                    multi: provider.multi,
                    eager,
                    providers: vec![provider.clone()],
                    hooks: provider.hooks,
                    kind: scope.kind,
                    is_module: scope.is_module,
                    span: scope.span,
                },
            );
            continue;
        };

        if record.multi != provider.multi {
            let span = if provider.span.is_empty() {
                scope.span
            } else {
                provider.span
            };
            errors.push(ProviderError::multi_binding_conflict(
                provider.token,
                span,
                interner,
            ));
        }
        if !provider.multi {
            record.providers.clear();
            record.hooks = LifecycleHooks::empty();
        }
        record.providers.push(provider.clone());
        record.eager |= eager;
        record.hooks |= provider.hooks;
    }
}

/// Merge everything an element's directives declare, plus the element's own
/// builtin capabilities.
///
/// Order: every directive's self-binding (eager), then the `providers` and
/// `viewProviders` of each directive with components first, then builtins.
#[tracing::instrument(level = "trace", skip_all, fields(directives = directives.len()))]
pub fn merge_directive_providers(
    directives: &[DirectiveMeta],
    builtin_providers: &[ProviderDescriptor],
    span: Span,
    errors: &mut ErrorList,
    interner: &StringInterner,
) -> ProviderMap {
    let mut map = ProviderMap::new();

    for directive in directives {
        let kind = if directive.is_component {
            ProviderKind::Component
        } else {
            ProviderKind::Directive
        };
        merge_providers(
            &[directive.ty.self_binding(span)],
            MergeScope::new(kind, true, span),
            &mut map,
            errors,
            interner,
        );
    }

    let components_first = directives
        .iter()
        .filter(|d| d.is_component)
        .chain(directives.iter().filter(|d| !d.is_component));
    for directive in components_first {
        merge_providers(
            &directive.providers,
            MergeScope::new(ProviderKind::PublicService, false, span),
            &mut map,
            errors,
            interner,
        );
        merge_providers(
            &directive.view_providers,
            MergeScope::new(ProviderKind::PrivateService, false, span),
            &mut map,
            errors,
            interner,
        );
    }

    merge_providers(
        builtin_providers,
        MergeScope::new(ProviderKind::Builtin, false, span),
        &mut map,
        errors,
        interner,
    );

    map
}

#[cfg(test)]
mod tests;
