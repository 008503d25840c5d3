//! Build-time declared-type code generation from rule-source files.
//!
//! Discovers rule-source files, drives one batch through the rule compiler
//! with full rule compilation suppressed, and hands the resulting
//! declared-type artifacts back to the surrounding build pipeline. This
//! stage is all-or-nothing per invocation: either every generated file is
//! returned or a [`CodegenError`] carries the full diagnostic list.

pub mod classify;
pub mod codegen;
pub mod config;
pub mod error;
pub mod generated;
pub mod outcome;

pub use classify::{classify, walk_files};
pub use codegen::DeclaredTypeCodegen;
pub use config::{ClockType, ConfigAggregator, EventProcessing, RuleConfig};
pub use error::CodegenError;
pub use generated::{collect, GeneratedFile, GeneratedFileType};
pub use outcome::{check_outcome, DiagnosticSink, TracingSink};
// Re-export the compiler boundary types callers need to implement or drive it
pub use ruleforge_compiler_api::{
    BatchError, Diagnostic, Resource, ResourceKind, RuleCompiler, Session, TypeResolver,
};
