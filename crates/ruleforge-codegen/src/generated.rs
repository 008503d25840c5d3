//! Caller-facing generated files and the collection pass that produces them.

use std::path::{Path, PathBuf};

use ruleforge_compiler_api::Session;
use serde::{Deserialize, Serialize};

/// Type marker on files this stage hands back to the build pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GeneratedFileType {
    /// A declared-type model extracted from rule-source input.
    DeclaredType,
}

/// A generated file ready for a downstream writer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFile {
    file_type: GeneratedFileType,
    path: PathBuf,
    contents: Vec<u8>,
}

impl GeneratedFile {
    pub fn new(file_type: GeneratedFileType, path: impl Into<PathBuf>, contents: Vec<u8>) -> Self {
        Self {
            file_type,
            path: path.into(),
            contents,
        }
    }

    pub fn file_type(&self) -> GeneratedFileType {
        self.file_type
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }
}

/// Flatten a successful session's package outputs into one artifact sequence.
///
/// Package order and intra-package order are both preserved. Empty slots are
/// skipped, and every surviving artifact is re-tagged as a declared type;
/// the compiler's own kind descriptor does not survive this pass.
pub fn collect(session: Session) -> Vec<GeneratedFile> {
    session
        .outputs()
        .iter()
        .flat_map(|output| output.artifacts().iter())
        .flatten()
        .map(|artifact| {
            GeneratedFile::new(
                GeneratedFileType::DeclaredType,
                artifact.path(),
                artifact.contents().to_vec(),
            )
        })
        .collect()
}
