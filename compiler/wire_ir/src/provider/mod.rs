//! Provider descriptors: the recipes that satisfy a token.
//!
//! Metadata extraction hands the resolver [`ProviderEntry`] trees (nested
//! lists, bare types, descriptors). Normalization flattens them into
//! [`ProviderDescriptor`]s, which are immutable from then on.
//!
//! # Binding strategies
//!
//! ```text
//! Binding::Class(TypeRef)       construct the type, deps from its constructor
//! Binding::Factory(FactoryRef)  call the factory, deps from its parameters
//! Binding::Existing(Token)      alias another token
//! Binding::Value(ProviderValue) literal value, no deps
//! ```

use bitflags::bitflags;

use crate::{DependencyRequest, Name, Span, Token};

bitflags! {
    /// Lifecycle hooks declared by a provided type.
    ///
    /// A type with any hook is instantiated eagerly so its hooks run.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct LifecycleHooks: u16 {
        const ON_INIT = 1 << 0;
        const ON_DESTROY = 1 << 1;
        const DO_CHECK = 1 << 2;
        const ON_CHANGES = 1 << 3;
        const AFTER_CONTENT_INIT = 1 << 4;
        const AFTER_CONTENT_CHECKED = 1 << 5;
        const AFTER_VIEW_INIT = 1 << 6;
        const AFTER_VIEW_CHECKED = 1 << 7;
    }
}

/// Reference to a declared type together with its constructor dependencies.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeRef {
    /// Declared type name.
    pub name: Name,
    /// Constructor dependencies.
    pub di_deps: Vec<DependencyRequest>,
    /// Lifecycle hooks the type implements.
    pub hooks: LifecycleHooks,
}

impl TypeRef {
    /// Type with no constructor dependencies and no hooks.
    pub fn new(name: Name) -> Self {
        TypeRef {
            name,
            di_deps: Vec::new(),
            hooks: LifecycleHooks::empty(),
        }
    }

    #[must_use]
    pub fn with_deps(mut self, deps: Vec<DependencyRequest>) -> Self {
        self.di_deps = deps;
        self
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: LifecycleHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// The token identifying this type.
    #[inline]
    pub fn token(&self) -> Token {
        Token::Type(self.name)
    }

    /// Self-binding: the type's own token bound to itself via `useClass`.
    pub fn self_binding(&self, span: Span) -> ProviderDescriptor {
        ProviderDescriptor::class(self.token(), self.clone())
            .with_hooks(self.hooks)
            .at(span)
    }
}

/// Reference to a factory function and its parameters.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FactoryRef {
    /// Factory function name.
    pub name: Name,
    /// Factory parameters.
    pub di_deps: Vec<DependencyRequest>,
}

impl FactoryRef {
    pub fn new(name: Name, di_deps: Vec<DependencyRequest>) -> Self {
        FactoryRef { name, di_deps }
    }
}

/// Literal provider value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProviderValue {
    Null,
    Bool(bool),
    Int(i64),
    Str(Name),
    /// Opaque expression, carried through unevaluated.
    Expr(Name),
}

/// How a token is satisfied.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Binding {
    Class(TypeRef),
    Factory(FactoryRef),
    Existing(Token),
    Value(ProviderValue),
}

/// A normalized binding.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ProviderDescriptor {
    /// Token being provided.
    pub token: Token,
    /// Lifecycle hooks declared by the token's type.
    pub hooks: LifecycleHooks,
    /// Binding strategy.
    pub binding: Binding,
    /// Explicit dependency list; overrides the class/factory dependencies.
    pub deps: Option<Vec<DependencyRequest>>,
    /// Contributes to a multi-binding.
    pub multi: bool,
    /// Where the binding was declared.
    pub span: Span,
}

impl ProviderDescriptor {
    fn new(token: Token, binding: Binding) -> Self {
        ProviderDescriptor {
            token,
            hooks: LifecycleHooks::empty(),
            binding,
            deps: None,
            multi: false,
            span: Span::DUMMY,
        }
    }

    /// `{ provide: token, useClass: ty }`
    pub fn class(token: Token, ty: TypeRef) -> Self {
        Self::new(token, Binding::Class(ty))
    }

    /// `{ provide: token, useFactory: factory }`
    pub fn factory(token: Token, factory: FactoryRef) -> Self {
        Self::new(token, Binding::Factory(factory))
    }

    /// `{ provide: token, useExisting: existing }`
    pub fn existing(token: Token, existing: Token) -> Self {
        Self::new(token, Binding::Existing(existing))
    }

    /// `{ provide: token, useValue: value }`
    pub fn value(token: Token, value: ProviderValue) -> Self {
        Self::new(token, Binding::Value(value))
    }

    #[must_use]
    pub fn multi(mut self) -> Self {
        self.multi = true;
        self
    }

    #[must_use]
    pub fn with_deps(mut self, deps: Vec<DependencyRequest>) -> Self {
        self.deps = Some(deps);
        self
    }

    #[must_use]
    pub fn with_hooks(mut self, hooks: LifecycleHooks) -> Self {
        self.hooks = hooks;
        self
    }

    #[must_use]
    pub fn at(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Dependencies requested when instantiating this binding.
    ///
    /// Explicit `deps` win over the class constructor or factory parameters.
    /// Aliases and values request nothing.
    pub fn declared_deps(&self) -> &[DependencyRequest] {
        match (&self.deps, &self.binding) {
            (Some(deps), Binding::Class(_) | Binding::Factory(_)) => deps,
            (None, Binding::Class(ty)) => &ty.di_deps,
            (None, Binding::Factory(f)) => &f.di_deps,
            (_, Binding::Existing(_) | Binding::Value(_)) => &[],
        }
    }
}

/// Un-normalized provider input, as handed over by metadata extraction.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ProviderEntry {
    /// An already-normalized descriptor.
    Descriptor(ProviderDescriptor),
    /// A bare type reference, shorthand for a self `useClass` binding.
    Type(TypeRef, Span),
    /// A nested provider list.
    List(Vec<ProviderEntry>),
    /// Anything else; `shape` describes what was found.
    Unknown { shape: String, span: Span },
}
