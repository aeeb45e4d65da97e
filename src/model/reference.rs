//! Reference sites — one (project, location) pair per observed use.

use crate::base::{ProjectId, SourceLocation};

/// A single reference to a member: the project the referencing code
/// belongs to plus the location of the reference.
///
/// Identical (project, location) pairs are the same site; the
/// classifier collapses them. Beyond identity a site carries no
/// further meaning.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceSite {
    /// The project containing the referencing code.
    pub project: ProjectId,
    /// Where the reference appears.
    pub location: SourceLocation,
}

impl ReferenceSite {
    /// Create a reference site.
    pub fn new(project: ProjectId, location: SourceLocation) -> Self {
        Self { project, location }
    }
}
