//! # minterface
//!
//! Minimal interface synthesis: given a type's member list and, for
//! each member, the set of reference sites outside the type's
//! declaring project, derive the smallest interface declaration that
//! exposes only the members actually used from outside.
//!
//! All symbol and reference resolution is delegated to an injected
//! [`Oracle`](oracle::Oracle); this crate is the pure filtering and
//! formatting layer on top of a completed reference snapshot.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! synth     → classification, eligibility, rendering, assembly
//!   ↓
//! oracle    → the injected symbol & reference abstraction
//!   ↓
//! model     → members, parameters, reference sites
//!   ↓
//! base      → primitives (ProjectId, SourceLocation)
//! ```
//!
//! ## Usage
//!
//! ```
//! use minterface::model::Member;
//! use minterface::oracle::MemoryOracle;
//! use minterface::synthesize_interface;
//!
//! let mut oracle = MemoryOracle::new();
//! let lib = oracle.add_project("LibToRefactor");
//! oracle.add_type(
//!     lib,
//!     "LibToRefactor.OneClass",
//!     vec![Member::property("LibToRefactor.OneClass", "IntProp", "int", 0)],
//! );
//!
//! let spec = synthesize_interface(&oracle, "LibToRefactor", "OneClass");
//! assert!(spec.is_empty()); // nothing referenced from outside yet
//! ```

// ============================================================================
// MODULES (dependency order: base → model → oracle → synth)
// ============================================================================

/// Foundation types: ProjectId, SourceLocation
pub mod base;

/// Data model: members, parameters, reference sites
pub mod model;

/// The injected symbol & reference oracle
pub mod oracle;

/// Synthesis pipeline: classify, filter, render, assemble
pub mod synth;

// Re-export the common entry points
pub use synth::{InterfaceSpec, Synthesizer, UsageReport, synthesize_interface, usage_report};

// Re-export foundation types
pub use base::{ProjectId, SourceLocation};
