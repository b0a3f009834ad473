use crate::config::AuditConfig;
use crate::walker::{self, Descend, DirSnapshot, DirVisitor};
use std::path::PathBuf;

/// Collects directories with no entries at all.
///
/// A directory holding only excluded subdirectories (say, a lone `node_modules`)
/// still has entries and is not reported.
#[derive(Debug, Default)]
pub struct EmptyFolders {
    found: Vec<PathBuf>,
}

impl EmptyFolders {
    pub fn into_found(self) -> Vec<PathBuf> {
        self.found
    }
}

impl DirVisitor for EmptyFolders {
    fn visit(&mut self, dir: &DirSnapshot, _config: &AuditConfig) -> Descend {
        if dir.is_empty() {
            self.found.push(dir.path.clone());
            return Descend::Stop;
        }
        Descend::Continue
    }
}

pub fn check(config: &AuditConfig) -> Vec<PathBuf> {
    let mut visitor = EmptyFolders::default();
    walker::walk(&config.root_dir, config, &mut visitor);
    visitor.into_found()
}
