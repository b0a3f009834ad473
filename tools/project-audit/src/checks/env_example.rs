use crate::config::AuditConfig;
use crate::walker::{self, Descend, DirSnapshot, DirVisitor};

pub const ENV_EXAMPLE: &str = ".env.example";
pub const ENV: &str = ".env";

/// Flags a `.env.example` that has no `.env` next to it.
///
/// The finding is a single flag for the whole run. Once a directory trips it,
/// that branch is not descended further; sibling branches are still visited.
#[derive(Debug, Default)]
pub struct EnvExample {
    orphaned: bool,
}

impl EnvExample {
    pub fn orphaned(&self) -> bool {
        self.orphaned
    }
}

impl DirVisitor for EnvExample {
    fn visit(&mut self, dir: &DirSnapshot, _config: &AuditConfig) -> Descend {
        if dir.contains(ENV_EXAMPLE) && !dir.contains(ENV) {
            self.orphaned = true;
            return Descend::Stop;
        }
        Descend::Continue
    }
}

pub fn check(config: &AuditConfig) -> bool {
    let mut visitor = EnvExample::default();
    walker::walk(&config.root_dir, config, &mut visitor);
    visitor.orphaned()
}
