//! The compiler seam: batch execution and type resolution.

use thiserror::Error;

use crate::resource::Resource;
use crate::session::{Session, SessionConfig};

/// A type reference the resolver was able to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    qualified_name: String,
}

impl ResolvedType {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }
}

/// Lookup scope the compiler consults to resolve symbol and type references
/// during model extraction. Swappable by the caller; implementations must be
/// safe to share read-only across a run.
pub trait TypeResolver: Send + Sync {
    fn resolve(&self, qualified_name: &str) -> Option<ResolvedType>;
}

/// Resolver that answers nothing; every reference stays unresolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopResolver;

impl TypeResolver for NoopResolver {
    fn resolve(&self, _qualified_name: &str) -> Option<ResolvedType> {
        None
    }
}

/// Unexpected runtime failure inside the compiler during batch execution.
///
/// Distinct from a [`crate::Diagnostic`]: diagnostics describe problems with
/// the input, a `BatchError` means the engine itself gave up.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct BatchError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BatchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The external rule compiler, seen from the caller's side.
///
/// One call compiles one atomic batch. Input problems are recorded on the
/// session as diagnostics; `Err` is reserved for engine failures. Anything
/// already recorded on the session survives an `Err` so callers can surface
/// partial diagnostics next to the failure.
pub trait RuleCompiler {
    fn run_batch(
        &self,
        config: &SessionConfig,
        batch: &[Resource],
        session: &mut Session,
    ) -> Result<(), BatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_resolver_answers_nothing() {
        assert!(NoopResolver.resolve("com.example.Person").is_none());
    }

    #[test]
    fn batch_error_chains_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let err = BatchError::with_source("engine aborted", io);
        assert_eq!(err.message(), "engine aborted");
        assert!(std::error::Error::source(&err).is_some());
    }
}
