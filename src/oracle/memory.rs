//! In-memory oracle backed by explicitly registered snapshot data.
//!
//! `MemoryOracle` owns all state and answers queries from it; populate
//! it with `add_project` / `add_type` / `add_reference`, then hand it
//! to the synthesizer. Declaration order is whatever order members
//! were registered in.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::base::ProjectId;
use crate::model::{Member, ReferenceSite};

use super::{Oracle, OracleError};

/// Everything the oracle knows about one registered type.
#[derive(Clone, Debug, Default)]
struct TypeEntry {
    members: Vec<Member>,
    declared_interfaces: Vec<Arc<str>>,
    /// References keyed by member declaration index.
    references: IndexMap<u32, Vec<ReferenceSite>>,
}

/// An [`Oracle`] answering from registered in-memory data.
///
/// Reference implementation of the oracle contract: tests build their
/// fixture workspaces with it, and embedders that already resolved a
/// snapshot (for example from a serialized index) can load it here
/// instead of implementing the trait themselves.
#[derive(Clone, Debug, Default)]
pub struct MemoryOracle {
    /// Project display names; index = raw ProjectId.
    projects: Vec<Arc<str>>,
    /// Registered types by fully-qualified name, insertion-ordered.
    types: IndexMap<Arc<str>, TypeEntry>,
    /// Declaring project per type.
    type_projects: IndexMap<Arc<str>, ProjectId>,
}

impl MemoryOracle {
    /// Create an empty oracle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a project and get its id.
    pub fn add_project(&mut self, name: impl Into<Arc<str>>) -> ProjectId {
        let id = ProjectId::new(self.projects.len() as u32);
        self.projects.push(name.into());
        id
    }

    /// Register a type with its declaring project and member list.
    ///
    /// Member order is declaration order; each member's `index` is
    /// rewritten to its position here so fixtures cannot get the two
    /// out of sync.
    pub fn add_type(
        &mut self,
        project: ProjectId,
        type_name: impl Into<Arc<str>>,
        mut members: Vec<Member>,
    ) {
        let type_name = type_name.into();
        for (i, member) in members.iter_mut().enumerate() {
            member.index = i as u32;
        }
        self.types.insert(
            type_name.clone(),
            TypeEntry {
                members,
                ..TypeEntry::default()
            },
        );
        self.type_projects.insert(type_name, project);
    }

    /// Record the interfaces a registered type declares itself to
    /// implement.
    pub fn set_declared_interfaces(
        &mut self,
        type_name: &str,
        interfaces: Vec<Arc<str>>,
    ) {
        if let Some(entry) = self.types.get_mut(type_name) {
            entry.declared_interfaces = interfaces;
        }
    }

    /// Record a reference site against the first member of
    /// `type_name` named `member_name`.
    ///
    /// For overloads, target a specific declaration with
    /// [`add_reference_at`](Self::add_reference_at).
    pub fn add_reference(&mut self, type_name: &str, member_name: &str, site: ReferenceSite) {
        let Some(entry) = self.types.get_mut(type_name) else {
            return;
        };
        let Some(member) = entry
            .members
            .iter()
            .find(|m| m.name.as_ref() == member_name)
        else {
            return;
        };
        let index = member.index;
        entry.references.entry(index).or_default().push(site);
    }

    /// Record a reference site against the member at declaration
    /// index `index` of `type_name`.
    pub fn add_reference_at(&mut self, type_name: &str, index: u32, site: ReferenceSite) {
        if let Some(entry) = self.types.get_mut(type_name) {
            entry.references.entry(index).or_default().push(site);
        }
    }

    fn entry(&self, type_name: &str) -> Result<&TypeEntry, OracleError> {
        self.types
            .get(type_name)
            .ok_or_else(|| OracleError::TypeNotFound(type_name.to_string()))
    }
}

impl Oracle for MemoryOracle {
    fn members(&self, type_name: &str) -> Result<Vec<Member>, OracleError> {
        Ok(self.entry(type_name)?.members.clone())
    }

    fn find_references(&self, member: &Member) -> Result<Vec<ReferenceSite>, OracleError> {
        let entry = self.entry(member.declaring_type.as_ref()).map_err(|_| {
            OracleError::MemberNotFound(member.display_name.to_string())
        })?;
        Ok(entry
            .references
            .get(&member.index)
            .cloned()
            .unwrap_or_default())
    }

    fn containing_project(&self, member: &Member) -> Result<ProjectId, OracleError> {
        self.type_projects
            .get(member.declaring_type.as_ref())
            .copied()
            .ok_or_else(|| OracleError::MemberNotFound(member.display_name.to_string()))
    }

    fn declared_interfaces(&self, type_name: &str) -> Result<Vec<Arc<str>>, OracleError> {
        Ok(self.entry(type_name)?.declared_interfaces.clone())
    }

    fn project_name(&self, project: ProjectId) -> Option<Arc<str>> {
        self.projects.get(project.raw() as usize).cloned()
    }

    fn projects(&self) -> Vec<ProjectId> {
        (0..self.projects.len() as u32).map(ProjectId::new).collect()
    }
}
