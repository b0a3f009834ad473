use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct RemovalReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, String)>,
}

/// Remove each directory independently. A failure is logged and recorded, then the next path is tried.
pub fn remove_empty_folders(paths: &[PathBuf]) -> RemovalReport {
    let mut report = RemovalReport::default();

    for path in paths {
        // remove_dir refuses non-empty directories, so anything created since the audit survives.
        match fs::remove_dir(path) {
            Ok(()) => report.removed.push(path.clone()),
            Err(error) => {
                tracing::error!(path = %path.display(), %error, "couldn't delete folder");
                report.failed.push((path.clone(), error.to_string()));
            }
        }
    }

    report
}
