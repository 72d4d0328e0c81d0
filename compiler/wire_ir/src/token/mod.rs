//! Dependency-injection tokens.
//!
//! A [`Token`] is the identity key of a binding. Tokens compare structurally:
//! two declared-type tokens are equal when they name the same type, two value
//! tokens when they carry the same interned string. Ambient platform
//! capabilities are a closed [`Builtin`] set rather than magic type names.

use std::fmt;

use crate::{Name, StringInterner};

/// Ambient capability tokens the resolver answers without a provider map.
///
/// `Injector` and `ComponentFactoryResolver` are available in every scope.
/// The remaining variants are per-element handles, visible only to
/// directive and component requesters.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    /// The ambient injector.
    Injector,
    /// Factory-resolver capability (module scope only).
    ComponentFactoryResolver,
    /// Render handle of the host element.
    Renderer,
    /// Handle to the host element itself.
    ElementRef,
    /// Change-detector handle of the enclosing view.
    ChangeDetectorRef,
    /// Template handle of a template element.
    TemplateRef,
    /// View-container capability of the host element.
    ViewContainerRef,
}

impl Builtin {
    /// Source-level name of the capability.
    pub fn as_str(self) -> &'static str {
        match self {
            Builtin::Injector => "Injector",
            Builtin::ComponentFactoryResolver => "ComponentFactoryResolver",
            Builtin::Renderer => "Renderer",
            Builtin::ElementRef => "ElementRef",
            Builtin::ChangeDetectorRef => "ChangeDetectorRef",
            Builtin::TemplateRef => "TemplateRef",
            Builtin::ViewContainerRef => "ViewContainerRef",
        }
    }

    /// Per-element handles returned directly to directive requesters.
    pub fn is_element_handle(self) -> bool {
        matches!(
            self,
            Builtin::Renderer
                | Builtin::ElementRef
                | Builtin::ChangeDetectorRef
                | Builtin::TemplateRef
        )
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity key for a dependency.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Token {
    /// A declared type (class, interface token, module).
    Type(Name),
    /// A primitive value key: attribute names, reference names, string tokens.
    Value(Name),
    /// An ambient platform capability.
    Builtin(Builtin),
}

impl Token {
    /// The builtin capability, if this is one.
    #[inline]
    pub fn builtin(self) -> Option<Builtin> {
        match self {
            Token::Builtin(b) => Some(b),
            Token::Type(_) | Token::Value(_) => None,
        }
    }

    /// Whether this token is exactly `builtin`.
    #[inline]
    pub fn is(self, builtin: Builtin) -> bool {
        self == Token::Builtin(builtin)
    }

    /// Human-readable token name for diagnostics.
    pub fn display(self, interner: &StringInterner) -> &'static str {
        match self {
            Token::Type(name) | Token::Value(name) => interner.lookup(name),
            Token::Builtin(b) => b.as_str(),
        }
    }
}

impl From<Builtin> for Token {
    fn from(builtin: Builtin) -> Self {
        Token::Builtin(builtin)
    }
}
