use crate::config::AuditConfig;
use crate::walker::{self, Descend, DirSnapshot, DirVisitor};
use regex::Regex;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Readme,
    GitIgnore,
}

impl MarkerKind {
    fn pattern<'a>(&self, config: &'a AuditConfig) -> &'a Regex {
        match self {
            MarkerKind::Readme => &config.readme_pattern,
            MarkerKind::GitIgnore => &config.gitignore_pattern,
        }
    }
}

/// Collects marker files that appear more than once inside a single directory.
///
/// Only siblings count: a README at the root and another in `docs/` are two
/// separate directories with one README each, and neither is reported.
#[derive(Debug)]
pub struct DuplicateMarkers {
    kind: MarkerKind,
    found: Vec<PathBuf>,
}

impl DuplicateMarkers {
    pub fn new(kind: MarkerKind) -> Self {
        Self { kind, found: Vec::new() }
    }

    pub fn into_found(self) -> Vec<PathBuf> {
        self.found
    }
}

impl DirVisitor for DuplicateMarkers {
    fn visit(&mut self, dir: &DirSnapshot, config: &AuditConfig) -> Descend {
        let pattern = self.kind.pattern(config);
        let matches: Vec<PathBuf> = dir
            .files()
            .filter(|e| {
                e.name_str()
                    .is_some_and(|n| !config.is_excluded(n) && pattern.is_match(n))
            })
            .map(|e| dir.path.join(&e.name))
            .collect();

        if matches.len() > 1 {
            self.found.extend(matches);
        }
        Descend::Continue
    }
}

pub fn check(config: &AuditConfig, kind: MarkerKind) -> Vec<PathBuf> {
    let mut visitor = DuplicateMarkers::new(kind);
    walker::walk(&config.root_dir, config, &mut visitor);
    visitor.into_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    fn touch(path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn readme_variants_in_one_dir_are_duplicates() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("README"));
        touch(&root.path().join("README.md"));

        let found: HashSet<PathBuf> = check(&AuditConfig::from_root(root.path()), MarkerKind::Readme)
            .into_iter()
            .collect();
        let expected: HashSet<PathBuf> =
            [root.path().join("README"), root.path().join("README.md")].into_iter().collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn parent_and_child_readme_are_not_duplicates() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("README.md"));
        touch(&root.path().join("docs/README.md"));

        assert!(check(&AuditConfig::from_root(root.path()), MarkerKind::Readme).is_empty());
    }

    #[test]
    fn nested_duplicates_are_found_under_a_clean_parent() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("README.md"));
        touch(&root.path().join("pkg/readme"));
        touch(&root.path().join("pkg/Readme.md"));

        let found = check(&AuditConfig::from_root(root.path()), MarkerKind::Readme);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.parent() == Some(root.path().join("pkg").as_path())));
    }

    #[test]
    fn readme_directory_is_not_a_match() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join("README.md"));
        fs::create_dir_all(root.path().join("readme")).unwrap();

        assert!(check(&AuditConfig::from_root(root.path()), MarkerKind::Readme).is_empty());
    }

    #[test]
    fn single_gitignore_per_dir_passes() {
        let root = tempfile::tempdir().unwrap();
        touch(&root.path().join(".gitignore"));
        touch(&root.path().join("web/.gitignore"));

        assert!(check(&AuditConfig::from_root(root.path()), MarkerKind::GitIgnore).is_empty());
    }
}
