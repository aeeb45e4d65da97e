//! Foundation types for minimal interface synthesis.
//!
//! This module provides fundamental types used throughout the crate:
//! - [`ProjectId`] - Cheap project (compilation unit) identifiers
//! - [`SourceLocation`] - File + line/column identity of a reference site
//!
//! This module has NO dependencies on other minterface modules.

mod ids;
mod location;

pub use ids::ProjectId;
pub use location::SourceLocation;
