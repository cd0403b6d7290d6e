//! Input expansion and archive entry naming.

use std::collections::HashSet;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::archive::ArchiveError;

/// What an entry is on disk. Symlinks are stored, never followed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    Symlink(PathBuf),
}

/// One filesystem object to be written into an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Where the data is read from.
    pub source: PathBuf,
    /// Relative name inside the archive.
    pub name: PathBuf,
    pub kind: EntryKind,
}

/// Derive the in-archive name of `path`.
///
/// Root, drive prefix, `.` and `..` components are dropped, so `/var/log/x`
/// becomes `var/log/x` and `../data/a` becomes `data/a`.
pub fn archive_name(path: &Path) -> Result<PathBuf, ArchiveError> {
    let name: PathBuf = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part),
            _ => None,
        })
        .collect();

    if name.as_os_str().is_empty() {
        return Err(ArchiveError::InvalidEntryName(path.to_path_buf()));
    }
    Ok(name)
}

/// Files that must never be picked up while walking inputs.
#[derive(Debug, Default)]
pub struct Exclusions {
    paths: Vec<(OsString, PathBuf)>,
}

impl Exclusions {
    pub fn none() -> Self {
        Self::default()
    }

    /// Exclude the given files. Paths whose directory cannot be resolved are
    /// ignored, since nothing inside an unresolvable directory can be walked.
    pub fn new(paths: &[&Path]) -> Self {
        let paths = paths
            .iter()
            .filter_map(|p| Some((p.file_name()?.to_os_string(), resolve(p)?)))
            .collect();
        Self { paths }
    }

    fn contains(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };
        self.paths
            .iter()
            .filter(|(name, _)| name == file_name)
            .any(|(_, resolved)| resolve(path).as_ref() == Some(resolved))
    }
}

/// Canonical parent joined with the file name; the file itself need not exist.
fn resolve(path: &Path) -> Option<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    Some(fs::canonicalize(parent).ok()?.join(path.file_name()?))
}

/// Expand inputs into archive entries, recursing into directories.
///
/// Each archive name appears once; a path reached through several inputs
/// keeps its first occurrence.
pub fn collect_entries(inputs: &[PathBuf], exclusions: &Exclusions) -> Result<Vec<Entry>, ArchiveError> {
    let mut entries = Vec::new();
    let mut seen = HashSet::new();

    for input in inputs {
        match fs::symlink_metadata(input) {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ArchiveError::InputNotFound(input.clone()));
            }
            Err(e) => return Err(e.into()),
        }

        let walker = WalkDir::new(input)
            .follow_links(false)
            .follow_root_links(false)
            .sort_by_file_name();

        for item in walker {
            let item = item?;
            let path = item.path();

            if exclusions.contains(path) {
                tracing::debug!(path = %path.display(), "Skipping archive output");
                continue;
            }

            let file_type = item.file_type();
            let kind = if file_type.is_symlink() {
                EntryKind::Symlink(fs::read_link(path)?)
            } else if file_type.is_dir() {
                EntryKind::Dir
            } else if file_type.is_file() {
                EntryKind::File
            } else {
                tracing::warn!(path = %path.display(), "Skipping special file");
                continue;
            };

            let name = archive_name(path)?;
            if !seen.insert(name.clone()) {
                tracing::debug!(path = %path.display(), "Skipping duplicate entry");
                continue;
            }

            entries.push(Entry {
                source: path.to_path_buf(),
                name,
                kind,
            });
        }
    }

    Ok(entries)
}
