//! Version-control status collaborator.
//!
//! The audit only needs `(path, status code)` pairs. [`StatusSource`] is that
//! contract; [`GitStatus`] fulfils it by shelling out to `git status`.

use crate::runner::{CommandCall, CommandRunner};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One file from a status listing. Paths are relative to the repository root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    pub path: PathBuf,
    pub index: char,
    pub working_dir: char,
}

impl FileStatus {
    pub fn new(path: impl Into<PathBuf>, index: char, working_dir: char) -> Self {
        Self {
            path: path.into(),
            index,
            working_dir,
        }
    }
}

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("failed to run git: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("git status exited with {status}: {stderr}")]
    CommandFailed { status: i32, stderr: String },
}

pub trait StatusSource {
    fn status(&self, root: &Path) -> Result<Vec<FileStatus>, VcsError>;
}

pub struct GitStatus<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GitStatus<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> StatusSource for GitStatus<R> {
    fn status(&self, root: &Path) -> Result<Vec<FileStatus>, VcsError> {
        let call = CommandCall::new("git", &["status", "--porcelain", "-b", "-u", "--null"]).in_dir(root);
        let result = self.runner.run(call)?;
        if !result.success() {
            return Err(VcsError::CommandFailed {
                status: result.status,
                stderr: result.stderr.trim().to_string(),
            });
        }
        Ok(parse_porcelain_z(&result.stdout))
    }
}

/// Parse `git status --porcelain -z` output.
///
/// Records are NUL-separated `XY path`. Rename and copy records are followed by
/// an extra record holding the origin path, which is dropped.
pub fn parse_porcelain_z(output: &str) -> Vec<FileStatus> {
    let mut files = Vec::new();
    let mut records = output.split('\0');

    while let Some(record) = records.next() {
        if record.is_empty() || record.starts_with("## ") {
            continue;
        }

        let mut chars = record.chars();
        let (index, working_dir) = match (chars.next(), chars.next(), chars.next()) {
            (Some(x), Some(y), Some(' ')) => (x, y),
            _ => {
                tracing::warn!(record, "ignoring malformed status record");
                continue;
            }
        };

        files.push(FileStatus::new(chars.as_str(), index, working_dir));

        if matches!(index, 'R' | 'C') || matches!(working_dir, 'R' | 'C') {
            records.next();
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runner::CommandResult;
    use std::cell::RefCell;
    use std::io;

    struct FakeRunner {
        calls: RefCell<Vec<CommandCall>>,
        response: Option<CommandResult>,
    }

    impl FakeRunner {
        fn replying(status: i32, stdout: &str, stderr: &str) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                response: Some(CommandResult {
                    status,
                    stdout: stdout.to_string(),
                    stderr: stderr.to_string(),
                }),
            }
        }
    }

    impl CommandRunner for &FakeRunner {
        fn run(&self, command: CommandCall) -> io::Result<CommandResult> {
            self.calls.borrow_mut().push(command);
            self.response
                .clone()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "git not found"))
        }
    }

    #[test]
    fn parses_branch_header_modified_and_untracked() {
        let out = "## main...origin/main\0 M src/a.ts\0A  src/b.ts\0?? notes.txt\0";
        let files = parse_porcelain_z(out);
        assert_eq!(
            files,
            vec![
                FileStatus::new("src/a.ts", ' ', 'M'),
                FileStatus::new("src/b.ts", 'A', ' '),
                FileStatus::new("notes.txt", '?', '?'),
            ]
        );
    }

    #[test]
    fn rename_consumes_origin_record() {
        let out = "R  new.ts\0old.ts\0MM both.ts\0";
        let files = parse_porcelain_z(out);
        assert_eq!(
            files,
            vec![
                FileStatus::new("new.ts", 'R', ' '),
                FileStatus::new("both.ts", 'M', 'M'),
            ]
        );
    }

    #[test]
    fn paths_with_spaces_survive() {
        let files = parse_porcelain_z(" M dir with space/file name.md\0");
        assert_eq!(files[0].path, PathBuf::from("dir with space/file name.md"));
    }

    #[test]
    fn git_status_runs_in_root() {
        let runner = FakeRunner::replying(0, " M a.ts\0", "");
        let source = GitStatus::new(&runner);
        let files = source.status(Path::new("/repo")).unwrap();

        assert_eq!(files, vec![FileStatus::new("a.ts", ' ', 'M')]);
        let calls = runner.calls.borrow();
        assert_eq!(calls[0].program, "git");
        assert_eq!(calls[0].current_dir.as_deref(), Some(Path::new("/repo")));
    }

    #[test]
    fn nonzero_exit_is_command_failed() {
        let runner = FakeRunner::replying(128, "", "fatal: not a git repository\n");
        let err = GitStatus::new(&runner).status(Path::new("/tmp")).unwrap_err();
        match err {
            VcsError::CommandFailed { status, stderr } => {
                assert_eq!(status, 128);
                assert_eq!(stderr, "fatal: not a git repository");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn spawn_failure_is_reported() {
        let runner = FakeRunner {
            calls: RefCell::new(Vec::new()),
            response: None,
        };
        let err = GitStatus::new(&runner).status(Path::new("/repo")).unwrap_err();
        assert!(matches!(err, VcsError::Spawn(_)));
    }
}
