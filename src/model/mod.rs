//! Data model for minimal interface synthesis.
//!
//! The types here describe what the oracle reports about a type:
//! - [`Member`] - A member declared directly on a type
//! - [`MemberKind`], [`Visibility`] - Classification of a member
//! - [`Parameter`] - An ordered (type, name) method parameter
//! - [`ReferenceSite`] - A (project, location) pair recording one use
//!
//! These are plain data carriers; all policy (what is eligible, how a
//! member renders) lives in [`crate::synth`].

mod member;
mod reference;

pub use member::{Member, MemberKind, Parameter, PropertyAccessors, Visibility};
pub use reference::ReferenceSite;
