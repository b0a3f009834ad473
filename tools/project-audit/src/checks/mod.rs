pub mod duplicate_markers;
pub mod empty_folders;
pub mod env_example;
pub mod lock_files;
pub mod unstaged;

/// One rendered row of the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub violations: Vec<String>,
}
