//! Archive building subsystem.
//!
//! # Data Flow
//! ```text
//! AppConfig
//!     → entries.rs (expand inputs, derive entry names)
//!     → tarball.rs / zipfile.rs (write <output>.tmp)
//!     → rename over <output>
//!
//! compress_level = N > 1:
//!     repeat N-1 times: wrap <output> into <output>.tmp, rename over <output>
//! ```
//!
//! # Design Decisions
//! - Every pass writes a temp file first; the output path only ever holds a
//!   complete archive
//! - Levels nest the archive inside itself; codec settings never change

pub mod entries;
pub mod tarball;
pub mod zipfile;

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use thiserror::Error;

use crate::archive::entries::{collect_entries, Entry, Exclusions};
use crate::config::{AppConfig, ArchiveFormat};

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("cannot derive an archive entry name from {0}")]
    InvalidEntryName(PathBuf),
}

/// Outcome of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of archive passes written (equals `compress_level`).
    pub passes: u32,
    /// Entries written by the first pass.
    pub entries: usize,
    /// Size of the final archive.
    pub size_bytes: u64,
}

/// Path of the in-progress archive for `output`.
pub fn temp_path(output: &Path) -> PathBuf {
    let mut name = OsString::from(output.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// Build the archive described by `config`.
pub fn build_archive(config: &AppConfig) -> Result<BuildReport, ArchiveError> {
    let started = Instant::now();
    let output = config.output_file.as_path();
    let tmp = temp_path(output);
    let format = config.archive_type.format();

    let exclusions = Exclusions::new(&[output, tmp.as_path()]);
    let entries = collect_entries(&config.input_files, &exclusions)?;

    tracing::info!(
        output = %output.display(),
        archive_type = %config.archive_type,
        inputs = config.input_files.len(),
        entries = entries.len(),
        "Writing archive"
    );
    write_pass(format, &entries, &tmp, output)?;

    let nested_inputs = [output.to_path_buf()];
    for pass in 2..=config.compress_level {
        let nested = collect_entries(&nested_inputs, &Exclusions::none())?;
        write_pass(format, &nested, &tmp, output)?;
        tracing::debug!(pass, of = config.compress_level, "Nested archive pass complete");
    }

    let size_bytes = fs::metadata(output)?.len();
    tracing::info!(
        output = %output.display(),
        passes = config.compress_level,
        size_bytes,
        elapsed = ?started.elapsed(),
        "Archive complete"
    );

    Ok(BuildReport {
        passes: config.compress_level,
        entries: entries.len(),
        size_bytes,
    })
}

/// Write one archive to `tmp` and move it over `output`.
fn write_pass(format: ArchiveFormat, entries: &[Entry], tmp: &Path, output: &Path) -> Result<(), ArchiveError> {
    let written = match format {
        ArchiveFormat::Tar(codec) => tarball::write_tar(tmp, codec, entries),
        ArchiveFormat::Zip => zipfile::write_zip(tmp, entries),
    };

    let result = written.and_then(|()| fs::rename(tmp, output).map_err(ArchiveError::from));
    if result.is_err() {
        // The temp file may not exist if creation itself failed.
        let _ = fs::remove_file(tmp);
    }
    result
}
