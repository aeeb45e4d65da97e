//! Minimal interface synthesis pipeline.
//!
//! One pass per type: ask the oracle for the member list, classify
//! each member's reference sites into external vs declaring-project,
//! filter by eligibility, render the survivors, and assemble the
//! interface block.
//!
//! ```text
//! oracle.members(type)
//!     │
//!     ▼
//! classify(member, sites)      ← external sites only, deduplicated
//!     │
//!     ▼
//! eligibility(member, external) ← include / placeholder / skip
//!     │
//!     ▼
//! render(member, count)        ← one interface-member line
//!     │
//!     ▼
//! assemble(...)                ← namespace + interface block
//! ```
//!
//! The whole pass is a pure function of the oracle's snapshot:
//! single-threaded, no caching, byte-identical output on re-run.
//! Oracle failures degrade to a header-only [`InterfaceSpec`] and are
//! logged, never raised.

pub mod classify;
pub mod filter;
pub mod render;

mod assemble;
mod report;

use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, trace};

use crate::base::ProjectId;
use crate::oracle::Oracle;

pub use assemble::{InterfaceSpec, assemble};
pub use classify::{ExternalReferences, classify};
pub use filter::{Eligibility, PlaceholderReason, SkipReason, eligibility};
pub use render::{render, render_placeholder};
pub use report::{ProjectUsage, UsageReport, usage_report};

/// Drives the synthesis pipeline against one oracle.
pub struct Synthesizer<'a, O: Oracle> {
    oracle: &'a O,
}

impl<'a, O: Oracle> Synthesizer<'a, O> {
    /// Create a synthesizer over the given oracle.
    pub fn new(oracle: &'a O) -> Self {
        Self { oracle }
    }

    /// Synthesize the minimal interface for `namespace.type_name`.
    ///
    /// Members render in declaration order. A type the oracle cannot
    /// resolve, or a type no external project references, yields a
    /// header-only spec; neither case is an error.
    pub fn synthesize(&self, namespace: &str, type_name: &str) -> InterfaceSpec {
        let qualified = qualified_name(namespace, type_name);

        let members = match self.oracle.members(&qualified) {
            Ok(members) => members,
            Err(err) => {
                debug!("synthesize: {qualified}: {err}, emitting header only");
                return InterfaceSpec::empty(namespace, type_name);
            }
        };

        let mut lines = Vec::new();
        let mut consumers: IndexSet<ProjectId> = IndexSet::new();

        for member in &members {
            let declaring = match self.oracle.containing_project(member) {
                Ok(project) => project,
                Err(err) => {
                    debug!(
                        "synthesize: no declaring project for '{}': {err}, skipping",
                        member.display_name
                    );
                    continue;
                }
            };
            let sites = match self.oracle.find_references(member) {
                Ok(sites) => sites,
                Err(err) => {
                    // Best effort: one failed search never blocks the rest.
                    debug!(
                        "synthesize: reference search failed for '{}': {err}",
                        member.display_name
                    );
                    Vec::new()
                }
            };

            let external = classify(member, &sites, declaring);
            match eligibility(member, &external) {
                Eligibility::Include => {
                    consumers.extend(external.projects());
                    lines.push(render(member, external.count()));
                }
                Eligibility::Placeholder(reason) => {
                    consumers.extend(external.projects());
                    lines.push(render_placeholder(member, reason));
                }
                Eligibility::Skip(reason) => {
                    trace!(
                        "synthesize: skipping '{}': {reason:?}",
                        member.display_name
                    );
                }
            }
        }

        let base_interfaces = self.oracle.declared_interfaces(&qualified).unwrap_or_default();
        let consumer_names = consumers
            .iter()
            .map(|project| {
                self.oracle
                    .project_name(*project)
                    .unwrap_or_else(|| Arc::from(project.to_string()))
            })
            .collect();

        assemble(namespace, type_name, base_interfaces, consumer_names, lines)
    }
}

/// Synthesize the minimal interface for `namespace.type_name` using
/// `oracle`. Convenience wrapper over [`Synthesizer`].
pub fn synthesize_interface<O: Oracle>(
    oracle: &O,
    namespace: &str,
    type_name: &str,
) -> InterfaceSpec {
    Synthesizer::new(oracle).synthesize(namespace, type_name)
}

/// Join namespace and simple name; an empty namespace is allowed.
pub(crate) fn qualified_name(namespace: &str, type_name: &str) -> String {
    if namespace.is_empty() {
        type_name.to_string()
    } else {
        format!("{namespace}.{type_name}")
    }
}
