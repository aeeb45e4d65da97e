//! Project identifiers.

use std::fmt;

/// Identifier for a project (compilation unit) in the workspace.
///
/// Cheap to copy and compare; the oracle owns the mapping back to
/// display names. A member's declaring project and a reference site's
/// consuming project are both `ProjectId`s, and "external" means the
/// two differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectId(u32);

impl ProjectId {
    /// Create a project id from a raw index.
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw index backing this id.
    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project#{}", self.0)
    }
}
