use ruleforge_compiler_api::{BatchError, Diagnostic};
use thiserror::Error;

/// Errors produced by declared-type generation.
///
/// One `generate()` call is all-or-nothing: either the full artifact
/// sequence comes back, or one of these does and nothing else.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// The compiler rejected the batch with one or more diagnostics.
    #[error("rule compilation reported {} diagnostic(s)", diagnostics.len())]
    Rejected { diagnostics: Vec<Diagnostic> },

    /// The compiler failed unexpectedly during batch execution; any
    /// diagnostics recorded before the failure ride along.
    #[error("rule compiler failed: {source}")]
    CompilerFailure {
        #[source]
        source: BatchError,
        diagnostics: Vec<Diagnostic>,
    },

    /// I/O error while enumerating or classifying input files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CodegenError {
    /// Full diagnostic list behind this failure, empty for I/O errors.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            CodegenError::Rejected { diagnostics }
            | CodegenError::CompilerFailure { diagnostics, .. } => diagnostics,
            CodegenError::Io(_) => &[],
        }
    }
}
