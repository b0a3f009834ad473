use crate::config::AuditConfig;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, sockets, entries whose type could not be read, and anything else.
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Raw name as listed. Not necessarily UTF-8.
    pub name: OsString,
    pub kind: EntryKind,
}

impl DirEntryInfo {
    /// The name as text, or `None` when it is not valid UTF-8.
    pub fn name_str(&self) -> Option<&str> {
        self.name.to_str()
    }
}

/// One directory as read from disk: its path and immediate entries, in listing order.
#[derive(Debug, Clone)]
pub struct DirSnapshot {
    pub path: PathBuf,
    pub entries: Vec<DirEntryInfo>,
}

impl DirSnapshot {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True if an entry with exactly this name exists, whatever its kind.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name.as_os_str() == OsStr::new(name))
    }

    pub fn files(&self) -> impl Iterator<Item = &DirEntryInfo> {
        self.entries.iter().filter(|e| e.kind == EntryKind::File)
    }

    pub fn subdirs(&self) -> impl Iterator<Item = &DirEntryInfo> {
        self.entries.iter().filter(|e| e.kind == EntryKind::Dir)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Descend {
    Continue,
    Stop,
}

/// Called once per visited directory. Returning `Stop` prunes the subtree for this visitor only.
pub trait DirVisitor {
    fn visit(&mut self, dir: &DirSnapshot, config: &AuditConfig) -> Descend;
}

impl<F> DirVisitor for F
where
    F: FnMut(&DirSnapshot) -> Descend,
{
    fn visit(&mut self, dir: &DirSnapshot, _config: &AuditConfig) -> Descend {
        self(dir)
    }
}

/// Walk `root` depth-first, pre-order, with a single visitor.
pub fn walk(root: &Path, config: &AuditConfig, visitor: &mut dyn DirVisitor) {
    walk_all(root, config, &mut [visitor]);
}

/// Walk `root` once, feeding every directory to each visitor that is still active on that branch.
pub fn walk_all(root: &Path, config: &AuditConfig, visitors: &mut [&mut dyn DirVisitor]) {
    let active = vec![true; visitors.len()];
    walk_inner(root, config, visitors, &active);
}

fn walk_inner(
    dir: &Path,
    config: &AuditConfig,
    visitors: &mut [&mut dyn DirVisitor],
    active: &[bool],
) {
    let snapshot = match read_snapshot(dir) {
        Ok(s) => s,
        Err(error) => {
            tracing::warn!(path = %dir.display(), %error, "skipping unreadable directory");
            return;
        }
    };

    let mut child_active = Vec::with_capacity(active.len());
    for (visitor, &is_active) in visitors.iter_mut().zip(active) {
        let keep = is_active && visitor.visit(&snapshot, config) == Descend::Continue;
        child_active.push(keep);
    }

    if !child_active.iter().any(|a| *a) {
        return;
    }

    for entry in snapshot.subdirs() {
        if entry.name_str().is_some_and(|n| config.is_excluded(n)) {
            continue;
        }
        walk_inner(&snapshot.path.join(&entry.name), config, visitors, &child_active);
    }
}

/// Read one directory without following symlinks.
///
/// An entry the listing cannot produce at all is logged and dropped. An entry
/// whose type cannot be read is kept as `Other` so the raw entry count stays right.
pub fn read_snapshot(dir: &Path) -> io::Result<DirSnapshot> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(e) => e,
            Err(error) => {
                tracing::warn!(path = %dir.display(), %error, "skipping unreadable entry");
                continue;
            }
        };

        let file_type = entry.file_type();
        if let Err(error) = &file_type {
            tracing::warn!(path = %entry.path().display(), %error, "could not read entry type");
        }

        entries.push(DirEntryInfo {
            name: entry.file_name(),
            kind: entry_kind(&file_type),
        });
    }

    Ok(DirSnapshot {
        path: dir.to_path_buf(),
        entries,
    })
}

fn entry_kind(file_type: &io::Result<fs::FileType>) -> EntryKind {
    match file_type {
        Ok(t) if t.is_dir() => EntryKind::Dir,
        Ok(t) if t.is_file() => EntryKind::File,
        _ => EntryKind::Other,
    }
}
