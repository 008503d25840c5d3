//! The declared-type generation stage.
//!
//! One [`DeclaredTypeCodegen`] owns one classified resource set and drives
//! one batch through the rule compiler per [`generate`] call: classify,
//! compile with the heavy phases suppressed, aggregate errors, collect.
//!
//! [`generate`]: DeclaredTypeCodegen::generate

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ruleforge_compiler_api::{
    NoopResolver, PhaseConfig, ReleaseId, Resource, RuleCompiler, Session, SessionConfig,
    TypeResolver,
};

use crate::classify::{classify, walk_files};
use crate::config::{ConfigAggregator, RuleConfig};
use crate::error::CodegenError;
use crate::generated::{collect, GeneratedFile};
use crate::outcome::{check_outcome, DiagnosticSink, TracingSink};

/// Generates declared-type artifacts from rule-source files.
///
/// The resource set is fixed at construction; each `generate()` call builds
/// its own session and configuration, so one instance can be invoked
/// repeatedly and concurrent callers each construct their own instance.
pub struct DeclaredTypeCodegen<C> {
    compiler: C,
    resources: BTreeSet<Resource>,
    resolver: Arc<dyn TypeResolver>,
    sink: Arc<dyn DiagnosticSink>,
}

impl<C: RuleCompiler> DeclaredTypeCodegen<C> {
    /// Recursively enumerate every file beneath `base` and classify them.
    pub fn from_dir(compiler: C, base: &Path) -> Result<Self, CodegenError> {
        let files = walk_files(base)?;
        Ok(Self::with_resources(compiler, classify(files)))
    }

    /// Classify an explicit collection of file paths.
    pub fn from_files<I>(compiler: C, files: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self::with_resources(compiler, classify(files))
    }

    /// Use already-classified resources; classification is skipped.
    pub fn from_resources<I>(compiler: C, resources: I) -> Self
    where
        I: IntoIterator<Item = Resource>,
    {
        Self::with_resources(compiler, resources.into_iter().collect())
    }

    fn with_resources(compiler: C, resources: BTreeSet<Resource>) -> Self {
        Self {
            compiler,
            resources,
            resolver: Arc::new(NoopResolver),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the type resolver consulted during model extraction.
    pub fn with_type_resolver(mut self, resolver: Arc<dyn TypeResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    /// Replace the sink that receives diagnostics on failure.
    pub fn with_diagnostic_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// The classified resources this instance will compile.
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }

    /// Run one batch compilation and collect the declared-type artifacts.
    ///
    /// The session is configured with synthetic release coordinates (this
    /// stage never resolves real module identities) and with rule-body and
    /// knowledge-package compilation suppressed: only the structural model
    /// is wanted, and the suppressed phases can fail for reasons unrelated
    /// to type declarations. All resources go in as one atomic batch.
    ///
    /// Fails with [`CodegenError::Rejected`] when the compiler records
    /// diagnostics, or [`CodegenError::CompilerFailure`] when it fails
    /// outright; either way nothing is returned and every diagnostic has
    /// been reported through the sink first.
    pub fn generate(&self) -> Result<Vec<GeneratedFile>, CodegenError> {
        let config = SessionConfig::new(
            ReleaseId::dummy(),
            PhaseConfig::model_only(),
            Arc::clone(&self.resolver),
        );

        let batch: Vec<Resource> = self.resources.iter().cloned().collect();
        tracing::debug!(
            resources = batch.len(),
            release_id = %config.release_id(),
            "running declared-type batch"
        );

        let mut session = Session::new();
        let caught = self
            .compiler
            .run_batch(&config, &batch, &mut session)
            .err();

        check_outcome(&mut session, caught, self.sink.as_ref())?;

        Ok(collect(session))
    }

    /// Register this stage's configuration fragment with the aggregate
    /// application configuration generator.
    pub fn update_config(&self, aggregator: &mut dyn ConfigAggregator) {
        aggregator.register_rule_config(RuleConfig::default());
    }
}
