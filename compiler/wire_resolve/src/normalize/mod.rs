//! Provider normalization.
//!
//! Flattens raw provider entries into a list of [`ProviderDescriptor`]s:
//! nested lists are expanded in order, bare types become self `useClass`
//! bindings, and unrecognized entries are reported and skipped.

use wire_ir::{ProviderDescriptor, ProviderEntry};

use crate::error::ProviderError;

/// Normalization output. Errors don't stop normalization.
#[derive(Clone, Debug, Default)]
pub struct Normalized {
    pub providers: Vec<ProviderDescriptor>,
    pub errors: Vec<ProviderError>,
}

#[tracing::instrument(level = "trace", skip_all, fields(entries = entries.len()))]
pub fn normalize_providers(entries: &[ProviderEntry]) -> Normalized {
    let mut out = Normalized::default();
    flatten_into(entries, &mut out);
    out
}

fn flatten_into(entries: &[ProviderEntry], out: &mut Normalized) {
    for entry in entries {
        match entry {
            ProviderEntry::Descriptor(descriptor) => out.providers.push(descriptor.clone()),
            ProviderEntry::Type(ty, span) => out.providers.push(ty.self_binding(*span)),
            ProviderEntry::List(nested) => flatten_into(nested, out),
            ProviderEntry::Unknown { shape, span } => {
                out.errors.push(ProviderError::unknown_shape(shape, *span));
            }
        }
    }
}

#[cfg(test)]
mod tests;
