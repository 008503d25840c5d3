//! Rule-source resources and their kind classification.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Recognized kinds of rule-source input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    /// Declarative rule/type definition source (`.rule`).
    RuleSource,
}

/// Ordered list of kinds the classifier matches against; the first kind
/// whose extension matches a file name wins.
pub const KNOWN_KINDS: &[ResourceKind] = &[ResourceKind::RuleSource];

impl ResourceKind {
    /// File extensions recognized for this kind, without the leading dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::RuleSource => &["rule"],
        }
    }

    /// Whether `file_name` carries one of this kind's extensions.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        self.extensions()
            .iter()
            .any(|ext| Path::new(file_name).extension().and_then(|e| e.to_str()) == Some(*ext))
    }
}

/// A classified input unit: a file handle plus its resource kind.
///
/// Identity is the path alone, so sets of resources dedupe by path. Content
/// is read lazily; classification only ever inspects the file name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    path: PathBuf,
    kind: ResourceKind,
}

impl Resource {
    pub fn new(path: impl Into<PathBuf>, kind: ResourceKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Byte content access, deferred until the compiler needs it.
    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

impl PartialEq for Resource {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Resource {}

impl PartialOrd for Resource {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Resource {
    fn cmp(&self, other: &Self) -> Ordering {
        self.path.cmp(&other.path)
    }
}

impl std::hash::Hash for Resource {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}
