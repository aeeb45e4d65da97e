//! Source location identity for reference sites.

use std::fmt;
use std::sync::Arc;

/// A location in source code where a member is read, written, or
/// invoked (0-indexed line/column).
///
/// Locations are value identity for distinct-site counting: two sites
/// with the same file, line, and column are the same site; two sites
/// in the same project at different locations count separately.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceLocation {
    /// Path of the file containing the site.
    pub file: Arc<str>,
    /// Line of the site (0-indexed).
    pub line: u32,
    /// Column of the site (0-indexed).
    pub column: u32,
}

impl SourceLocation {
    /// Create a location from file/line/column coordinates.
    pub fn new(file: impl Into<Arc<str>>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}
