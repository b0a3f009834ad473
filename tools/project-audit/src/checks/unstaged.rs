use crate::vcs::StatusSource;
use std::path::{Path, PathBuf};

/// Working-directory code for a tracked file modified but not staged.
pub const MODIFIED: char = 'M';

/// Files whose working-directory status is `M`. Added, deleted, renamed and
/// untracked entries are deliberately left out. A failing status query is
/// logged and yields nothing.
pub fn check(root: &Path, source: &dyn StatusSource) -> Vec<PathBuf> {
    let files = match source.status(root) {
        Ok(files) => files,
        Err(error) => {
            tracing::warn!(path = %root.display(), %error, "could not read version-control status");
            return Vec::new();
        }
    };

    files
        .into_iter()
        .filter(|f| f.working_dir == MODIFIED)
        .map(|f| f.path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcs::{FileStatus, VcsError};

    struct FixedStatus(Vec<FileStatus>);

    impl StatusSource for FixedStatus {
        fn status(&self, _root: &Path) -> Result<Vec<FileStatus>, VcsError> {
            Ok(self.0.clone())
        }
    }

    struct NotARepo;

    impl StatusSource for NotARepo {
        fn status(&self, _root: &Path) -> Result<Vec<FileStatus>, VcsError> {
            Err(VcsError::CommandFailed {
                status: 128,
                stderr: "fatal: not a git repository".to_string(),
            })
        }
    }

    #[test]
    fn keeps_only_working_dir_modified() {
        let source = FixedStatus(vec![
            FileStatus::new("a.ts", ' ', 'M'),
            FileStatus::new("b.ts", ' ', 'A'),
            FileStatus::new("c.ts", 'M', ' '),
            FileStatus::new("d.ts", '?', '?'),
            FileStatus::new("e.ts", 'M', 'M'),
            FileStatus::new("f.ts", ' ', 'D'),
        ]);
        let found = check(Path::new("/repo"), &source);
        assert_eq!(found, vec![PathBuf::from("a.ts"), PathBuf::from("e.ts")]);
    }

    #[test]
    fn query_error_leaves_result_empty() {
        assert!(check(Path::new("/repo"), &NotARepo).is_empty());
    }
}
