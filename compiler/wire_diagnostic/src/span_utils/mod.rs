//! Span utility functions for diagnostic processing.
//!
//! Provides line and column computation used by `DiagnosticQueue` for
//! sorting.

/// Convert a byte offset to a 1-based (line, column) pair.
///
/// The column counts characters, not bytes. Offsets past the end clamp to
/// the end of the source.
pub fn offset_to_line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let mut line = 1u32;
    let mut line_start = 0usize;

    for (i, &byte) in source.as_bytes().iter().enumerate() {
        if i >= offset {
            break;
        }
        if byte == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }

    let col_text = source.get(line_start..offset).unwrap_or("");
    let col = u32::try_from(col_text.chars().count()).unwrap_or(u32::MAX - 1) + 1;

    (line, col)
}

#[cfg(test)]
mod tests;
