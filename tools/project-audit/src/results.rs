use crate::checks::lock_files::{classify_lock_files, LockFileVerdict};
use crate::checks::CheckResult;
use serde::Serialize;
use std::path::PathBuf;

pub const ENV_EXAMPLE_CHECK: &str = ".env.example without .env";
pub const LOCK_FILES_CHECK: &str = "Multiple lock files";

/// Everything one audit run found. Built once, then only read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditResults {
    /// Absolute paths of directories with no entries.
    pub empty_folders: Vec<PathBuf>,
    pub unused_env_example: bool,
    /// Absolute paths of every recognized lock file in the tree.
    pub multiple_lock_files: Vec<PathBuf>,
    pub duplicated_readme_files: Vec<PathBuf>,
    #[serde(rename = "duplicatedGitIgnoreFiles")]
    pub duplicated_gitignore_files: Vec<PathBuf>,
    /// Reserved. No detector fills it yet.
    pub unused_files: Vec<PathBuf>,
    /// Repository-relative paths, as reported by version control.
    pub unstaged_files: Vec<PathBuf>,
}

impl AuditResults {
    pub fn lock_file_verdict(&self) -> LockFileVerdict {
        classify_lock_files(&self.multiple_lock_files)
    }

    /// One row per check, in a fixed order.
    pub fn check_results(&self) -> Vec<CheckResult> {
        vec![
            row("Empty folders", &self.empty_folders),
            CheckResult {
                name: ENV_EXAMPLE_CHECK.to_string(),
                passed: !self.unused_env_example,
                violations: Vec::new(),
            },
            CheckResult {
                name: LOCK_FILES_CHECK.to_string(),
                passed: self.multiple_lock_files.len() <= 1,
                violations: display_all(&self.multiple_lock_files),
            },
            row("Multiple README files", &self.duplicated_readme_files),
            row("Multiple .gitignore files", &self.duplicated_gitignore_files),
            row("Files with unstaged changes", &self.unstaged_files),
        ]
    }

    pub fn all_passed(&self) -> bool {
        self.check_results().iter().all(|r| r.passed)
    }
}

fn row(name: &str, paths: &[PathBuf]) -> CheckResult {
    CheckResult {
        name: name.to_string(),
        passed: paths.is_empty(),
        violations: display_all(paths),
    }
}

fn display_all(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_passes_everything() {
        let results = AuditResults::default();
        assert!(results.all_passed());
        assert_eq!(results.check_results().len(), 6);
    }

    #[test]
    fn one_lock_file_is_still_a_pass() {
        let results = AuditResults {
            multiple_lock_files: vec![PathBuf::from("/repo/yarn.lock")],
            ..Default::default()
        };
        assert!(results.all_passed());
    }

    #[test]
    fn serializes_with_original_field_names() {
        let results = AuditResults {
            unused_env_example: true,
            ..Default::default()
        };
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["unusedEnvExample"], true);
        assert!(json["duplicatedGitIgnoreFiles"].as_array().unwrap().is_empty());
        assert!(json["emptyFolders"].is_array());
        assert!(json["unusedFiles"].is_array());
    }
}
