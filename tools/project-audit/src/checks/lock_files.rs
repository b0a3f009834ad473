use crate::config::{self, AuditConfig};
use crate::walker::{self, Descend, DirSnapshot, DirVisitor};
use std::path::{Path, PathBuf};

/// Collects every recognized lock file in the tree. Never prunes.
#[derive(Debug, Default)]
pub struct LockFiles {
    found: Vec<PathBuf>,
}

impl LockFiles {
    pub fn into_found(self) -> Vec<PathBuf> {
        self.found
    }
}

impl DirVisitor for LockFiles {
    fn visit(&mut self, dir: &DirSnapshot, config: &AuditConfig) -> Descend {
        for kind in &config.lock_files {
            if dir.contains(kind.file_name) {
                self.found.push(dir.path.join(kind.file_name));
            }
        }
        Descend::Continue
    }
}

pub fn check(config: &AuditConfig) -> Vec<PathBuf> {
    let mut visitor = LockFiles::default();
    walker::walk(&config.root_dir, config, &mut visitor);
    visitor.into_found()
}

/// How a set of lock-file findings should be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockFileVerdict {
    /// Zero or one lock file.
    Pass,
    /// Several lock files, all written by the same manager (warning).
    Homogeneous { manager: &'static str },
    /// Lock files from more than one manager (error).
    Conflicting { managers: Vec<&'static str> },
}

pub fn classify_lock_files(found: &[PathBuf]) -> LockFileVerdict {
    if found.len() < 2 {
        return LockFileVerdict::Pass;
    }

    let mut managers: Vec<&'static str> = Vec::new();
    for manager in found.iter().filter_map(|p| manager_of(p)) {
        if !managers.contains(&manager) {
            managers.push(manager);
        }
    }

    match managers.as_slice() {
        [] => LockFileVerdict::Pass,
        [single] => LockFileVerdict::Homogeneous { manager: *single },
        _ => LockFileVerdict::Conflicting { managers },
    }
}

fn manager_of(path: &Path) -> Option<&'static str> {
    path.file_name()
        .and_then(|n| n.to_str())
        .and_then(config::manager_for)
}
