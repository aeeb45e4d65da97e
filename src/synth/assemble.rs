//! Interface assembly — wrapping rendered member lines in a source block.

use std::fmt;
use std::sync::Arc;

/// The synthesized output: a minimal interface declaration for one
/// type, plus the metadata it was assembled from.
///
/// Invariants: `members` holds only lines for members with at least
/// one external reference site; non-public fields and nested types
/// never appear; accessor methods never get standalone lines. An
/// empty `members` list means "nothing to synthesize" — the rendered
/// text is then the header comment alone, and callers must not treat
/// that as a failure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterfaceSpec {
    /// Namespace the interface is declared in.
    pub namespace: Arc<str>,
    /// Simple name of the source type.
    pub type_name: Arc<str>,
    /// Derived interface name (`<TypeName>_ExtractedInterface`).
    pub interface_name: Arc<str>,
    /// Base interfaces inherited from the source type's declared list.
    pub base_interfaces: Vec<Arc<str>>,
    /// Names of the consuming projects, first-seen order.
    pub consuming_projects: Vec<Arc<str>>,
    /// Rendered member lines in declaration order, placeholders
    /// included.
    pub members: Vec<String>,
}

impl InterfaceSpec {
    /// A header-only spec for `namespace.type_name` with no members.
    pub fn empty(namespace: impl Into<Arc<str>>, type_name: impl Into<Arc<str>>) -> Self {
        let type_name: Arc<str> = type_name.into();
        Self {
            namespace: namespace.into(),
            interface_name: Arc::from(format!("{type_name}_ExtractedInterface")),
            type_name,
            base_interfaces: Vec::new(),
            consuming_projects: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Check whether there is nothing to synthesize.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of member lines (placeholders included).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Fully-qualified name of the source type.
    pub fn qualified_type_name(&self) -> String {
        if self.namespace.is_empty() {
            self.type_name.to_string()
        } else {
            format!("{}.{}", self.namespace, self.type_name)
        }
    }

    /// Header comment naming the source type and its consumers.
    fn header(&self) -> String {
        if self.consuming_projects.is_empty() {
            format!("// {}", self.qualified_type_name())
        } else {
            let consumers: Vec<&str> = self
                .consuming_projects
                .iter()
                .map(|p| p.as_ref())
                .collect();
            format!("// {} in {}", self.qualified_type_name(), consumers.join(", "))
        }
    }

    /// Render the spec to source text.
    ///
    /// Header comment, then a namespace block wrapping the interface
    /// declaration. With no members the header stands alone.
    pub fn to_source_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.header());
        out.push('\n');

        if self.is_empty() {
            return out;
        }

        let bases = if self.base_interfaces.is_empty() {
            String::new()
        } else {
            let names: Vec<&str> = self.base_interfaces.iter().map(|b| b.as_ref()).collect();
            format!(" : {}", names.join(", "))
        };

        out.push_str(&format!("namespace {}\n{{\n", self.namespace));
        out.push_str(&format!("    interface {}{}\n    {{\n", self.interface_name, bases));
        for line in &self.members {
            out.push_str("        ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("    }\n}\n");
        out
    }
}

impl fmt::Display for InterfaceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source_text())
    }
}

/// Assemble rendered member lines into an [`InterfaceSpec`].
pub fn assemble(
    namespace: impl Into<Arc<str>>,
    type_name: impl Into<Arc<str>>,
    base_interfaces: Vec<Arc<str>>,
    consuming_projects: Vec<Arc<str>>,
    members: Vec<String>,
) -> InterfaceSpec {
    let mut spec = InterfaceSpec::empty(namespace, type_name);
    spec.base_interfaces = base_interfaces;
    spec.consuming_projects = consuming_projects;
    spec.members = members;
    spec
}
