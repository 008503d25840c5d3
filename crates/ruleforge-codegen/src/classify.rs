//! Resource classification: file handles in, typed rule-source resources out.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use ruleforge_compiler_api::{Resource, KNOWN_KINDS};

/// Classify raw file paths into rule-source resources.
///
/// The first kind in the known-kind list whose extension matches a file
/// name determines that file's kind. Files matching no known extension are
/// dropped without comment; directory walks routinely include unrelated
/// files and that is not an error. Duplicate paths collapse to one entry.
///
/// Only file names are inspected here, never content.
pub fn classify<I>(files: I) -> BTreeSet<Resource>
where
    I: IntoIterator<Item = PathBuf>,
{
    files
        .into_iter()
        .filter_map(|path| {
            let file_name = path.file_name()?.to_str()?.to_owned();
            let kind = KNOWN_KINDS
                .iter()
                .find(|kind| kind.matches_extension(&file_name))?;
            Some(Resource::new(path, *kind))
        })
        .collect()
}

/// Recursively enumerate every file beneath `base`.
///
/// Generic enumeration only; classification happens in [`classify`].
pub fn walk_files(base: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    collect_files(base, &mut files)?;
    Ok(files)
}

fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruleforge_compiler_api::ResourceKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn unrecognized_extensions_never_classify() {
        let classified = classify(vec![
            PathBuf::from("/in/model.rule"),
            PathBuf::from("/in/readme.txt"),
            PathBuf::from("/in/build.yaml"),
            PathBuf::from("/in/noextension"),
        ]);

        assert_eq!(classified.len(), 1);
        let only = classified.iter().next().unwrap();
        assert_eq!(only.path(), Path::new("/in/model.rule"));
        assert_eq!(only.kind(), ResourceKind::RuleSource);
    }

    #[test]
    fn classification_is_order_independent() {
        let forward = classify(vec![
            PathBuf::from("/in/a.rule"),
            PathBuf::from("/in/b.txt"),
            PathBuf::from("/in/c.rule"),
        ]);
        let reversed = classify(vec![
            PathBuf::from("/in/c.rule"),
            PathBuf::from("/in/b.txt"),
            PathBuf::from("/in/a.rule"),
        ]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn duplicate_paths_collapse() {
        let classified = classify(vec![
            PathBuf::from("/in/a.rule"),
            PathBuf::from("/in/a.rule"),
        ]);
        assert_eq!(classified.len(), 1);
    }

    #[test]
    fn walk_reaches_nested_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("sub/deeper")).unwrap();
        fs::write(temp.path().join("top.rule"), "declare Top end").unwrap();
        fs::write(temp.path().join("sub/mid.txt"), "notes").unwrap();
        fs::write(temp.path().join("sub/deeper/leaf.rule"), "declare Leaf end").unwrap();

        let files = walk_files(temp.path()).unwrap();
        assert_eq!(files.len(), 3);

        let classified = classify(files);
        assert_eq!(classified.len(), 2);
    }
}
