//! Wire IR - provider and scope metadata types
//!
//! This crate contains the data the resolver consumes:
//! - Spans for source locations
//! - Names for interned identifiers
//! - Tokens (declared types, primitive values, builtin capabilities)
//! - Provider descriptors and raw provider entries
//! - Dependency requests and queries
//! - Directive, module and template-element metadata
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: type, attribute and reference names are `Name(u32)`
//! - **Closed Sets**: binding strategies and builtin capabilities are enums
//! - **Flatten Trees**: template elements live in an arena, linked by index

/// Compile-time assertion that a type has a specific size.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod dependency;
mod interner;
pub mod metadata;
mod name;
mod provider;
mod query;
mod span;
mod token;

pub use dependency::{DepFlags, DependencyRequest};
pub use interner::{InternError, StringInterner};
pub use metadata::{
    Attribute, DirectiveMeta, ElementFacts, ElementId, ModuleMeta, Reference, TemplateTree,
};
pub use name::Name;
pub use provider::{
    Binding, FactoryRef, LifecycleHooks, ProviderDescriptor, ProviderEntry, ProviderValue,
    TypeRef,
};
pub use query::QueryMeta;
pub use span::Span;
pub use token::{Builtin, Token};
