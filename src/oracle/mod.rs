//! The symbol-and-reference oracle.
//!
//! All semantic knowledge — which members a type declares, where each
//! member is referenced, which project owns which code — comes from an
//! [`Oracle`] implementation injected by the embedder. Production
//! implementations back this trait with a live compiler platform;
//! [`MemoryOracle`] is the in-memory reference implementation used by
//! tests and by embedders that already hold a resolved snapshot.
//!
//! The synthesis pipeline never assumes anything about how the oracle
//! computed its answers, only that each answer is a completed snapshot.

mod memory;

use std::sync::Arc;

use thiserror::Error;

use crate::base::ProjectId;
use crate::model::{Member, ReferenceSite};

pub use memory::MemoryOracle;

/// Errors an oracle can report while resolving symbols or references.
///
/// The synthesis driver treats every variant as "nothing to
/// synthesize" — oracle failures degrade the output, they never
/// propagate out of synthesis.
#[derive(Debug, Error)]
pub enum OracleError {
    /// The requested type is unknown to the workspace.
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// The member does not belong to any known type.
    #[error("member not found: {0}")]
    MemberNotFound(String),

    /// The host reference-search engine failed.
    #[error("reference search failed: {0}")]
    Search(String),
}

/// The external semantic-analysis collaborator (symbol & reference
/// oracle).
///
/// Implementations must report members in declaration order, stably,
/// and tag every reference site with the consuming project's identity.
/// An empty reference set is a normal answer, not an error.
pub trait Oracle {
    /// All members declared directly on `type_name`, in declaration
    /// order.
    fn members(&self, type_name: &str) -> Result<Vec<Member>, OracleError>;

    /// Every reference site for `member`, internal and external alike.
    fn find_references(&self, member: &Member) -> Result<Vec<ReferenceSite>, OracleError>;

    /// The project that declares `member`.
    fn containing_project(&self, member: &Member) -> Result<ProjectId, OracleError>;

    /// The interfaces `type_name` declares itself to implement, in
    /// declaration order. Possibly empty.
    fn declared_interfaces(&self, type_name: &str) -> Result<Vec<Arc<str>>, OracleError>;

    /// Display name for a project, if the oracle knows one.
    fn project_name(&self, project: ProjectId) -> Option<Arc<str>>;

    /// Every project in the workspace, in workspace order. Drives the
    /// per-project usage report; synthesis itself never needs it.
    fn projects(&self) -> Vec<ProjectId>;
}
