//! Identifier sanitization for generated code.

use crate::error::{GeneratorError, Result};

/// Turn an arbitrary file or directory name into a code-safe identifier.
///
/// Every character outside `[0-9A-Za-z]` becomes `_`, leading
/// underscores left over from that replacement are stripped, and a
/// leading digit gets an `_` prefix so the result always starts a valid
/// identifier. Applied to one path segment at a time, never to a whole
/// path, so segments can't merge.
///
/// # Errors
///
/// Returns [`GeneratorError::UnusableName`] when the name contains no
/// alphanumeric characters at all.
pub fn sanitize_identifier(raw: &str) -> Result<String> {
    let replaced: String = raw
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let trimmed = replaced.trim_start_matches('_');
    if trimmed.is_empty() {
        return Err(GeneratorError::UnusableName {
            name: raw.to_string(),
        });
    }

    if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        Ok(format!("_{trimmed}"))
    } else {
        Ok(trimmed.to_string())
    }
}
