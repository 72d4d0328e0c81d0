//! Wire Resolve - static provider resolution
//!
//! Given the providers declared by modules, directives and components, this
//! crate decides, ahead of time, which binding satisfies each dependency of
//! each provider, which providers must be instantiated eagerly, and which
//! template queries each element satisfies.
//!
//! # Pipeline
//!
//! ```text
//! ProviderEntry lists
//!     ↓ normalize_providers()
//! ProviderDescriptor lists
//!     ↓ merge (per scope)
//! ProviderRecords
//!     ↓ ModuleProviderAnalyzer::parse() / resolve_view()
//! ResolvedRecords + errors
//! ```
//!
//! Errors never abort resolution; they are collected per scope and can be
//! rendered through `wire_diagnostic`.

mod config;
mod element;
mod error;
mod merge;
mod module;
mod normalize;
mod query;
mod record;
mod token_map;
mod view;

use std::sync::Once;

pub use config::ResolveConfig;
pub use element::{ElementProviders, ProviderViewContext, ScopeId};
pub use error::{ErrorList, ModuleResolveError, ProviderError, ProviderErrorKind};
pub use merge::{merge_directive_providers, merge_providers, MergeScope, ProviderMap};
pub use module::ModuleProviderAnalyzer;
pub use normalize::{normalize_providers, Normalized};
pub use query::{collect_matches, QueryIndex, QueryMatch, QueryWithId};
pub use record::{
    instantiation_order, ProviderKind, ProviderRecord, ResolvedBinding, ResolvedDependency,
    ResolvedProvider, ResolvedRecord,
};
pub use token_map::TokenMap;
pub use view::{resolve_view, ViewProviders};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for resolver debugging.
///
/// Call this early to enable tracing output. Set `RUST_LOG` to control
/// filtering:
/// - `RUST_LOG=wire_resolve=debug` - one span per element and module
/// - `RUST_LOG=wire_resolve=trace` - every instantiated provider
///
/// Safe to call more than once; only the first call installs a subscriber.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
