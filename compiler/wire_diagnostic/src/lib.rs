//! Diagnostic system for provider resolution errors.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - A span (where in the template or module it went wrong)
//! - Notes and suggestions (why, and how to fix)

mod diagnostic;
mod error_code;
pub mod queue;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
pub use queue::{too_many_errors, DiagnosticConfig, DiagnosticQueue};
