//! Compilation sessions: per-run configuration and accumulated results.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::compiler::TypeResolver;
use crate::output::PackageOutput;

/// Module coordinates in `group:name:version` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseId {
    group: String,
    name: String,
    version: String,
}

impl ReleaseId {
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Synthetic coordinates for sessions that never resolve or persist real
    /// module identities.
    pub fn dummy() -> Self {
        Self::new("dummy", "dummy", "0.0.0")
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

/// Which compiler phases a session runs.
///
/// Model/type extraction always runs; the two flags below gate the heavier
/// phases that turn rule bodies and knowledge packages into executable form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseConfig {
    /// Compile full rule-body declarations.
    pub rule_bodies: bool,
    /// Compile knowledge packages.
    pub knowledge_packages: bool,
}

impl PhaseConfig {
    /// All phases enabled.
    pub fn full() -> Self {
        Self {
            rule_bodies: true,
            knowledge_packages: true,
        }
    }

    /// Structural model extraction only; rule-body and knowledge-package
    /// compilation are suppressed.
    pub fn model_only() -> Self {
        Self {
            rule_bodies: false,
            knowledge_packages: false,
        }
    }
}

/// Immutable configuration for one batch run. Built fresh per invocation;
/// nothing here is shared across runs except the resolver handle, which is
/// read-only.
#[derive(Clone)]
pub struct SessionConfig {
    release_id: ReleaseId,
    phases: PhaseConfig,
    resolver: Arc<dyn TypeResolver>,
}

impl SessionConfig {
    pub fn new(release_id: ReleaseId, phases: PhaseConfig, resolver: Arc<dyn TypeResolver>) -> Self {
        Self {
            release_id,
            phases,
            resolver,
        }
    }

    pub fn release_id(&self) -> &ReleaseId {
        &self.release_id
    }

    pub fn phases(&self) -> PhaseConfig {
        self.phases
    }

    pub fn resolver(&self) -> &Arc<dyn TypeResolver> {
        &self.resolver
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("release_id", &self.release_id)
            .field("phases", &self.phases)
            .finish_non_exhaustive()
    }
}

/// An error record the compiler attaches to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    resource: Option<PathBuf>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            resource: None,
        }
    }

    pub fn for_resource(message: impl Into<String>, resource: impl Into<PathBuf>) -> Self {
        Self {
            message: message.into(),
            resource: Some(resource.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn resource(&self) -> Option<&Path> {
        self.resource.as_deref()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.resource {
            Some(path) => write!(f, "{}: {}", path.display(), self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

/// Accumulator for one batch run: diagnostics and per-package outputs, in
/// the order the compiler recorded them. Owned by a single invocation and
/// discarded once artifacts are extracted.
#[derive(Debug, Default)]
pub struct Session {
    diagnostics: Vec<Diagnostic>,
    outputs: Vec<PackageOutput>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn record_output(&mut self, output: PackageOutput) {
        self.outputs.push(output);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn has_diagnostics(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn outputs(&self) -> &[PackageOutput] {
        &self.outputs
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}
