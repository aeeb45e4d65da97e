//! Reference classification — external vs declaring-project sites.
//!
//! The oracle reports every reference site for a member, internal and
//! external alike. Classification keeps only the external ones,
//! collapses duplicate (project, location) pairs, and tracks a
//! per-project breakdown in first-seen order.

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::trace;

use crate::base::ProjectId;
use crate::model::{Member, ReferenceSite};

/// A member's external reference sites after classification.
///
/// An empty result is the normal "unused from outside" outcome, not
/// an error.
#[derive(Clone, Debug, Default)]
pub struct ExternalReferences {
    /// Deduplicated external sites, in first-seen order.
    pub sites: Vec<ReferenceSite>,
    /// Distinct external sites per consuming project, first-seen order.
    pub by_project: IndexMap<ProjectId, u32>,
}

impl ExternalReferences {
    /// Create an empty classification.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether any external site exists.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Number of distinct external sites (not distinct projects).
    pub fn count(&self) -> u32 {
        self.sites.len() as u32
    }

    /// Distinct external sites in one consuming project.
    pub fn count_in(&self, project: ProjectId) -> u32 {
        self.by_project.get(&project).copied().unwrap_or(0)
    }

    /// Consuming projects in first-seen order.
    pub fn projects(&self) -> impl Iterator<Item = ProjectId> + '_ {
        self.by_project.keys().copied()
    }
}

/// Partition a member's reference sites, keeping those whose
/// consuming project differs from `declaring_project`.
///
/// Identical (project, location) pairs collapse to one site; distinct
/// locations in the same project count separately. No side effects.
pub fn classify(
    member: &Member,
    sites: &[ReferenceSite],
    declaring_project: ProjectId,
) -> ExternalReferences {
    let mut seen: FxHashSet<&ReferenceSite> = FxHashSet::default();
    let mut external = ExternalReferences::empty();

    for site in sites {
        if site.project == declaring_project {
            continue;
        }
        if !seen.insert(site) {
            continue;
        }
        *external.by_project.entry(site.project).or_insert(0) += 1;
        external.sites.push(site.clone());
    }

    trace!(
        "classify: member='{}' total={} external={} projects={}",
        member.display_name,
        sites.len(),
        external.count(),
        external.by_project.len()
    );

    external
}
