//! Namespace paths derived from directory structure.

use crate::error::Result;
use crate::ident::sanitize_identifier;

/// Ordered sequence of sanitized namespace identifiers.
///
/// Derived deterministically from a file's directory location relative
/// to the input root: two files in the same directory always produce an
/// equal path. The empty path is valid and means the file sits directly
/// in the input root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamespacePath {
    segments: Vec<String>,
}

impl NamespacePath {
    /// The empty path: a file directly in the input root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path by sanitizing each raw directory segment
    /// independently.
    ///
    /// # Errors
    ///
    /// Fails if any segment has no alphanumeric characters.
    pub fn from_segments<I, S>(raw: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = Vec::new();
        for segment in raw {
            segments.push(sanitize_identifier(segment.as_ref())?);
        }
        Ok(Self { segments })
    }

    /// The sanitized identifiers, outermost first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

/// One embedded array as seen by both emitters: where it lives, what it
/// is called, and how many bytes it holds. Carries no payload; the
/// header never needs the bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDeclaration {
    pub namespace_path: NamespacePath,
    pub array_name: String,
    pub length: usize,
}
