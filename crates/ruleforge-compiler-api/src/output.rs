//! Compiler-side artifacts, grouped per originating rule package.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// The compiler's internal descriptor for what an artifact contains.
///
/// Consumers that only want the structural model re-tag artifacts on their
/// side; this descriptor does not survive collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArtifactKind {
    /// Declared-type model source.
    TypeModel,
    /// Package-level descriptor source.
    PackageDescriptor,
    /// Stub emitted in place of a suppressed rule-body compilation.
    RuleStub,
}

/// A (path, byte content) pair as emitted by the compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceArtifact {
    path: PathBuf,
    contents: Vec<u8>,
    kind: ArtifactKind,
}

impl SourceArtifact {
    pub fn new(path: impl Into<PathBuf>, contents: Vec<u8>, kind: ArtifactKind) -> Self {
        Self {
            path: path.into(),
            contents,
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &[u8] {
        &self.contents
    }

    pub fn into_parts(self) -> (PathBuf, Vec<u8>) {
        (self.path, self.contents)
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }
}

/// Ordered artifacts for one rule package.
///
/// Slots are `Option` because an intermediate construct may legitimately
/// produce no artifact; consumers skip the empty slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageOutput {
    package_name: String,
    artifacts: Vec<Option<SourceArtifact>>,
}

impl PackageOutput {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            artifacts: Vec::new(),
        }
    }

    pub fn push(&mut self, artifact: Option<SourceArtifact>) {
        self.artifacts.push(artifact);
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn artifacts(&self) -> &[Option<SourceArtifact>] {
        &self.artifacts
    }

    pub fn into_artifacts(self) -> Vec<Option<SourceArtifact>> {
        self.artifacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_output_keeps_slot_order() {
        let mut output = PackageOutput::new("com.example.model");
        output.push(Some(SourceArtifact::new(
            "com/example/model/A.out",
            b"a".to_vec(),
            ArtifactKind::TypeModel,
        )));
        output.push(None);
        output.push(Some(SourceArtifact::new(
            "com/example/model/B.out",
            b"b".to_vec(),
            ArtifactKind::PackageDescriptor,
        )));

        assert_eq!(output.artifacts().len(), 3);
        assert!(output.artifacts()[1].is_none());
        assert_eq!(
            output.artifacts()[2].as_ref().map(|a| a.kind()),
            Some(ArtifactKind::PackageDescriptor)
        );
    }
}
