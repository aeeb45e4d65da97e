//! Signature rendering — one interface-member line per eligible member.
//!
//! Pure functions that return strings. Parameter lists are rebuilt
//! from parameter metadata (type then name), never lifted from the
//! host display string, so default values and ref/out/in modifiers
//! are erased deterministically: the synthesized signature is
//! call-compatible but carries no parameter defaults.

use crate::model::{Member, MemberKind};

use super::filter::PlaceholderReason;

/// Render an eligible member as an interface-member line.
///
/// `count` is the member's distinct external site count. Every
/// rendering strips the fully-qualified declaring-type prefix from
/// the member's display name first. Fields promote to property
/// syntax; properties always emit both accessors.
pub fn render(member: &Member, count: u32) -> String {
    let kind = member.kind.display();
    match member.kind {
        MemberKind::Method => {
            let name = method_name(member);
            let params = parameter_list(member);
            format!(
                "{} {}({}); // {} used {} times",
                member.return_type, name, params, kind, count
            )
        }
        MemberKind::Property => format!(
            "{} {} {{ get; set; }} // {} used {} times",
            member.return_type,
            bare_name(member),
            kind,
            count
        ),
        MemberKind::Field => format!(
            "{} {} {{ get; set; }} // {} converted to Property in interface, used {} times",
            member.return_type,
            bare_name(member),
            kind,
            count
        ),
        MemberKind::Event => format!(
            "event {} {}; // {}",
            member.return_type,
            bare_name(member),
            kind
        ),
        MemberKind::NestedType => format!("// todo: enum {}", bare_name(member)),
    }
}

/// Render a comment placeholder for a member the filter demoted.
pub fn render_placeholder(member: &Member, reason: PlaceholderReason) -> String {
    let name = bare_name(member);
    match reason {
        PlaceholderReason::ExplicitInterfaceImpl => {
            format!("// todo: explicit interface implementation {name}")
        }
        PlaceholderReason::EnumeratorFactory => {
            format!("// todo: enumerator factory {name}")
        }
        PlaceholderReason::NestedType => format!("// todo: enum {name}"),
    }
}

/// Display name with the declaring-type prefix stripped.
fn bare_name(member: &Member) -> String {
    let prefix = format!("{}.", member.declaring_type);
    member.display_name.replace(&prefix, "")
}

/// Method name with prefix stripped, any display parameter list cut
/// off, and the generic type-parameter list re-attached when the
/// display string did not already carry one.
fn method_name(member: &Member) -> String {
    let stripped = bare_name(member);
    let mut name = match stripped.find('(') {
        Some(pos) => stripped[..pos].to_string(),
        None => stripped,
    };
    if name.is_empty() {
        name = member.name.to_string();
    }
    if member.is_generic() && !name.contains('<') {
        let params: Vec<&str> = member.type_parameters.iter().map(|p| p.as_ref()).collect();
        name.push('<');
        name.push_str(&params.join(", "));
        name.push('>');
    }
    name
}

/// Rebuild the parameter list as `Type name, Type name`.
fn parameter_list(member: &Member) -> String {
    member
        .parameters
        .iter()
        .map(|p| format!("{} {}", p.ty, p.name))
        .collect::<Vec<_>>()
        .join(", ")
}
