use regex::Regex;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Directories that are never traversed by any check. Matched case-insensitively.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "dist", "node_modules"];

pub const README_PATTERN: &str = r"(?i)^README(?:\.md)?$";
pub const GITIGNORE_PATTERN: &str = r"(?i)^\.gitignore$";

/// A recognized package-manager lock file and the manager that writes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockFileKind {
    pub file_name: &'static str,
    pub manager: &'static str,
}

pub const LOCK_FILES: &[LockFileKind] = &[
    LockFileKind { file_name: "package-lock.json", manager: "npm" },
    LockFileKind { file_name: "yarn.lock", manager: "yarn" },
    LockFileKind { file_name: "pnpm-lock.yaml", manager: "pnpm" },
    LockFileKind { file_name: "bun.lockb", manager: "bun" },
];

/// Look up the manager label for a lock file name.
pub fn manager_for(file_name: &str) -> Option<&'static str> {
    LOCK_FILES
        .iter()
        .find(|kind| kind.file_name == file_name)
        .map(|kind| kind.manager)
}

/// Everything a single audit run needs to know about what to skip and what to match.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub root_dir: PathBuf,
    excluded_dirs: HashSet<String>,
    pub readme_pattern: Regex,
    pub gitignore_pattern: Regex,
    pub lock_files: Vec<LockFileKind>,
}

impl AuditConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|d| d.to_string()).collect(),
            readme_pattern: Regex::new(README_PATTERN).expect("README pattern is valid"),
            gitignore_pattern: Regex::new(GITIGNORE_PATTERN).expect("gitignore pattern is valid"),
            lock_files: LOCK_FILES.to_vec(),
        }
    }

    /// Config rooted at the repository containing the working directory.
    /// `None` outside a repository; the CLI then audits `.` instead.
    pub fn discover() -> Option<Self> {
        let cwd = std::env::current_dir().ok()?;
        Self::discover_from(&cwd)
    }

    /// Nearest ancestor of `start` (inclusive) that holds a `.git` entry.
    pub fn discover_from(start: &Path) -> Option<Self> {
        start
            .ancestors()
            .find(|dir| dir.join(".git").exists())
            .map(Self::from_root)
    }

    /// Replace the exclusion set. Names are lowercased on the way in.
    pub fn with_excluded_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_dirs = names
            .into_iter()
            .map(|n| n.as_ref().to_lowercase())
            .collect();
        self
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.excluded_dirs.contains(&name.to_lowercase())
    }
}
