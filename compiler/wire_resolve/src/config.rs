//! Resolver configuration.

/// Knobs shared by the module and view resolvers.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ResolveConfig {
    /// Maximum number of errors recorded per scope (0 = unlimited).
    pub error_limit: usize,
}

impl ResolveConfig {
    pub fn with_error_limit(error_limit: usize) -> Self {
        ResolveConfig { error_limit }
    }
}
