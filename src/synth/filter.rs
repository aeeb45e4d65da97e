//! Member eligibility — which members the synthesized interface exposes.
//!
//! Rules apply in order; the first that fires wins. A member can be
//! included, demoted to a comment placeholder, or skipped outright.
//! Placeholders exist because omission beats an incorrect signature.

use crate::model::{Member, MemberKind};

use super::classify::ExternalReferences;

/// Why a member was skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No reference site outside the declaring project.
    NoExternalReferences,
    /// Compiler-synthesized property accessor; the owning property
    /// covers it.
    PropertyAccessor,
    /// Non-public member.
    NonPublic,
}

/// Why a member renders as a comment placeholder instead of a real
/// interface member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaceholderReason {
    /// Method implementing an interface member explicitly.
    ExplicitInterfaceImpl,
    /// Enumerator-factory method.
    EnumeratorFactory,
    /// Nested type; interfaces cannot carry it as a data member.
    NestedType,
}

/// Outcome of the eligibility rules for one member.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Eligibility {
    /// Render a real interface-member line.
    Include,
    /// Render a comment placeholder line.
    Placeholder(PlaceholderReason),
    /// Emit nothing for this member.
    Skip(SkipReason),
}

/// Decide how a member participates in the synthesized interface.
///
/// Rule order:
/// 1. no external sites → skip ("unused" outcome);
/// 2. synthesized property accessor → skip (the property covers it);
/// 3. explicit interface implementation or enumerator factory →
///    placeholder;
/// 4. non-public member → skip (fields and nested types are the
///    practical case; no non-public member may leak regardless);
/// 5. public nested type → placeholder;
/// 6. otherwise include.
pub fn eligibility(member: &Member, external: &ExternalReferences) -> Eligibility {
    if external.is_empty() {
        return Eligibility::Skip(SkipReason::NoExternalReferences);
    }
    if member.is_property_accessor() {
        return Eligibility::Skip(SkipReason::PropertyAccessor);
    }
    if member.kind == MemberKind::Method {
        if member.is_explicit_interface_impl {
            return Eligibility::Placeholder(PlaceholderReason::ExplicitInterfaceImpl);
        }
        if member.is_enumerator_factory {
            return Eligibility::Placeholder(PlaceholderReason::EnumeratorFactory);
        }
    }
    if !member.visibility.is_public() {
        return Eligibility::Skip(SkipReason::NonPublic);
    }
    if member.kind == MemberKind::NestedType {
        return Eligibility::Placeholder(PlaceholderReason::NestedType);
    }
    Eligibility::Include
}
