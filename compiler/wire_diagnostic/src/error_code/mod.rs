//! Error codes for resolver diagnostics.
//!
//! Format: E#### where the hundreds group indicates the phase:
//! - E01xx: provider normalization and merging
//! - E02xx: dependency resolution
//! - E9xxx: reporting

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Provider entry is neither a descriptor, a type, nor a list
    E0101,
    /// Token bound both as multi and non-multi provider
    E0102,
    /// Cyclic dependency between providers of one scope
    E0201,
    /// Required dependency has no provider
    E0202,
    /// Errors past the configured limit were not reported
    E9002,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0101 => "E0101",
            ErrorCode::E0102 => "E0102",
            ErrorCode::E0201 => "E0201",
            ErrorCode::E0202 => "E0202",
            ErrorCode::E9002 => "E9002",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests;
