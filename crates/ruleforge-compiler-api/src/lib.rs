//! Interface boundary of the Ruleforge rule compiler.
//!
//! The rule compiler itself lives elsewhere; this crate defines the types a
//! caller needs to drive one batch compilation: classified [`Resource`]s go
//! in, a [`Session`] accumulates [`Diagnostic`]s and per-package
//! [`PackageOutput`]s, and [`RuleCompiler`] is the seam an engine implements.

pub mod compiler;
pub mod output;
pub mod resource;
pub mod session;

pub use compiler::{BatchError, NoopResolver, ResolvedType, RuleCompiler, TypeResolver};
pub use output::{ArtifactKind, PackageOutput, SourceArtifact};
pub use resource::{Resource, ResourceKind, KNOWN_KINDS};
pub use session::{Diagnostic, PhaseConfig, ReleaseId, Session, SessionConfig};
