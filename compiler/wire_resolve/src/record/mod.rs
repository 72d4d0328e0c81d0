//! Provider records: the merged bindings of one token in one scope.
//!
//! A record starts out holding the normalized [`ProviderDescriptor`]s that
//! contributed to it. Resolution turns it into a [`ResolvedRecord`], whose
//! providers carry resolved dependencies instead.

use wire_ir::{
    DependencyRequest, FactoryRef, LifecycleHooks, ProviderDescriptor, ProviderValue, Span,
    Token, TypeRef,
};

/// Who declared a binding. Governs visibility between bindings.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProviderKind {
    /// `providers` of a directive or module; visible to content.
    PublicService,
    /// `viewProviders` of a component; visible only inside its view.
    PrivateService,
    /// The component type itself.
    Component,
    /// A directive type itself.
    Directive,
    /// Element-level builtin capability.
    Builtin,
}

impl ProviderKind {
    /// Whether a binding of this kind may depend on a binding of `target`
    /// kind declared on the same element.
    ///
    /// Public services and directives can't see view-private services, and
    /// services can't see element builtins.
    pub fn can_see(self, target: ProviderKind) -> bool {
        let private_hidden = matches!(self, ProviderKind::Directive | ProviderKind::PublicService)
            && target == ProviderKind::PrivateService;
        let builtin_hidden = matches!(
            self,
            ProviderKind::PrivateService | ProviderKind::PublicService
        ) && target == ProviderKind::Builtin;
        !(private_hidden || builtin_hidden)
    }

    /// Directive and component bindings may request element handles.
    pub fn is_directive_like(self) -> bool {
        matches!(self, ProviderKind::Directive | ProviderKind::Component)
    }
}

/// All bindings of one token in one scope.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProviderRecord<P = ProviderDescriptor> {
    pub token: Token,
    pub multi: bool,
    /// Instantiated when the scope is created rather than on first use.
    pub eager: bool,
    /// Contributing bindings in declaration order. A single binding record
    /// holds exactly one.
    pub providers: Vec<P>,
    /// Union of the contributing bindings' lifecycle hooks.
    pub hooks: LifecycleHooks,
    pub kind: ProviderKind,
    /// Self-binding of a module type.
    pub is_module: bool,
    pub span: Span,
}

/// A record whose bindings have been resolved.
pub type ResolvedRecord = ProviderRecord<ResolvedProvider>;

impl ProviderRecord {
    /// Replace the descriptors with their resolved forms.
    pub fn into_resolved(self, eager: bool, providers: Vec<ResolvedProvider>) -> ResolvedRecord {
        ProviderRecord {
            token: self.token,
            multi: self.multi,
            eager,
            providers,
            hooks: self.hooks,
            kind: self.kind,
            is_module: self.is_module,
            span: self.span,
        }
    }
}

/// How a resolved binding is satisfied.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResolvedBinding {
    Class(TypeRef),
    Factory(FactoryRef),
    /// Alias to another token, rewritten to the token the lookup found.
    Existing(Token),
    /// Literal value. Aliases resolved to a value collapse into this.
    Value(ProviderValue),
}

/// A binding with its dependencies resolved.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ResolvedProvider {
    pub token: Token,
    pub multi: bool,
    pub binding: ResolvedBinding,
    /// One entry per declared dependency, in order.
    pub deps: Vec<ResolvedDependency>,
    pub span: Span,
}

/// Outcome of looking up one dependency.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResolvedDependency {
    /// Satisfied by token lookup at runtime: a local or ancestor provider,
    /// a builtin, a query, or an injector above the analyzed scope.
    Token(DependencyRequest),
    /// Statically known value: an attribute, or `Null` for a missing
    /// optional dependency.
    Value(ProviderValue),
    /// Could not be satisfied; an error was reported.
    Unresolved(DependencyRequest),
}

impl ResolvedDependency {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, ResolvedDependency::Unresolved(_))
    }

    /// The looked-up token, for token and unresolved dependencies.
    pub fn token(&self) -> Option<Token> {
        match self {
            ResolvedDependency::Token(dep) | ResolvedDependency::Unresolved(dep) => Some(dep.token),
            ResolvedDependency::Value(_) => None,
        }
    }
}

/// Instantiation order: lazy records first, then eager ones, each group in
/// declaration order.
pub fn instantiation_order(
    records: impl IntoIterator<Item = ResolvedRecord>,
) -> Vec<ResolvedRecord> {
    let (eager, mut lazy): (Vec<_>, Vec<_>) = records.into_iter().partition(|r| r.eager);
    lazy.extend(eager);
    lazy
}
