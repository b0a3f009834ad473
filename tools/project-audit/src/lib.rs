pub mod checks;
pub mod cli;
pub mod cleanup;
pub mod config;
pub mod reporter;
pub mod results;
pub mod runner;
pub mod vcs;
pub mod walker;

use checks::duplicate_markers::{DuplicateMarkers, MarkerKind};
use checks::empty_folders::EmptyFolders;
use checks::env_example::EnvExample;
use checks::lock_files::LockFiles;
use std::time::Instant;

pub use config::AuditConfig;
pub use results::AuditResults;
pub use vcs::{GitStatus, StatusSource};

/// Run every check against `config.root_dir`.
///
/// The four filesystem checks share one traversal; each keeps its own findings
/// and they are merged here. The unstaged check asks `status` directly.
pub fn run_audit(config: &AuditConfig, status: &dyn StatusSource) -> AuditResults {
    let timing = std::env::var("PROJECT_AUDIT_TIMING").is_ok();
    let start = Instant::now();

    let mut empty = EmptyFolders::default();
    let mut env = EnvExample::default();
    let mut locks = LockFiles::default();
    let mut readmes = DuplicateMarkers::new(MarkerKind::Readme);
    let mut gitignores = DuplicateMarkers::new(MarkerKind::GitIgnore);

    walker::walk_all(
        &config.root_dir,
        config,
        &mut [&mut empty, &mut env, &mut locks, &mut readmes, &mut gitignores],
    );
    if timing {
        eprintln!("  [{:>6.0?}] tree walk", start.elapsed());
    }

    let vcs_start = Instant::now();
    let unstaged_files = checks::unstaged::check(&config.root_dir, status);
    if timing {
        eprintln!("  [{:>6.0?}] version-control status", vcs_start.elapsed());
    }

    let results = AuditResults {
        empty_folders: empty.into_found(),
        unused_env_example: env.orphaned(),
        multiple_lock_files: locks.into_found(),
        duplicated_readme_files: readmes.into_found(),
        duplicated_gitignore_files: gitignores.into_found(),
        unused_files: Vec::new(),
        unstaged_files,
    };

    tracing::debug!(
        root = %config.root_dir.display(),
        empty = results.empty_folders.len(),
        lock_files = results.multiple_lock_files.len(),
        unstaged = results.unstaged_files.len(),
        "audit finished"
    );
    results
}
