//! Per-project usage report.
//!
//! A workspace-wide view of the same classification the interface
//! synthesis runs on: for every project other than the declaring one,
//! the member lines that project actually uses, with per-project
//! counts. The declaring project is listed as skipped.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::base::ProjectId;
use crate::oracle::Oracle;

use super::classify::classify;
use super::filter::{Eligibility, eligibility};
use super::render::{render, render_placeholder};

/// One project's section of the report.
#[derive(Clone, Debug)]
pub struct ProjectUsage {
    /// The project this section describes.
    pub project: ProjectId,
    /// Display name.
    pub name: Arc<str>,
    /// True for the declaring project, which is never searched
    /// against itself.
    pub skipped: bool,
    /// Member lines this project references, declaration order,
    /// counts scoped to this project.
    pub lines: Vec<String>,
}

/// Usage of one type's members across every project in the workspace.
#[derive(Clone, Debug, Default)]
pub struct UsageReport {
    /// Fully-qualified name of the inspected type.
    pub type_name: Arc<str>,
    /// One section per workspace project, workspace order.
    pub sections: Vec<ProjectUsage>,
}

impl UsageReport {
    /// Render the report as text: a `=== <project>` header per
    /// section, then its member lines (or ` skipped`).
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!("=== {}\n", section.name));
            if section.skipped {
                out.push_str(" skipped\n");
                continue;
            }
            for line in &section.lines {
                out.push_str(line);
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for UsageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

/// Build the per-project usage report for `namespace.type_name`.
///
/// Sections appear for every workspace project in workspace order; a
/// project with no references to the type gets an empty section. An
/// unresolvable type yields a report with no sections.
pub fn usage_report<O: Oracle>(oracle: &O, namespace: &str, type_name: &str) -> UsageReport {
    let qualified = super::qualified_name(namespace, type_name);
    let mut report = UsageReport {
        type_name: Arc::from(qualified.as_str()),
        ..UsageReport::default()
    };

    let members = match oracle.members(&qualified) {
        Ok(members) => members,
        Err(err) => {
            debug!("usage_report: {qualified}: {err}, emitting empty report");
            return report;
        }
    };

    // Classify each member once; sections then read off the breakdown.
    let mut classified = Vec::with_capacity(members.len());
    let mut declaring_project = None;
    for member in &members {
        let Ok(declaring) = oracle.containing_project(member) else {
            continue;
        };
        declaring_project.get_or_insert(declaring);
        let sites = oracle.find_references(member).unwrap_or_default();
        let external = classify(member, &sites, declaring);
        classified.push((member, external));
    }

    for project in oracle.projects() {
        let name = oracle
            .project_name(project)
            .unwrap_or_else(|| Arc::from(project.to_string()));

        if declaring_project == Some(project) {
            report.sections.push(ProjectUsage {
                project,
                name,
                skipped: true,
                lines: Vec::new(),
            });
            continue;
        }

        let mut lines = Vec::new();
        for (member, external) in &classified {
            let in_project = external.count_in(project);
            if in_project == 0 {
                continue;
            }
            match eligibility(member, external) {
                Eligibility::Include => lines.push(render(member, in_project)),
                Eligibility::Placeholder(reason) => {
                    lines.push(render_placeholder(member, reason))
                }
                Eligibility::Skip(_) => {}
            }
        }

        report.sections.push(ProjectUsage {
            project,
            name,
            skipped: false,
            lines,
        });
    }

    report
}
