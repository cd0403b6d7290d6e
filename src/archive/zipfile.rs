//! Zip writer.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use time::{OffsetDateTime, PrimitiveDateTime};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

use crate::archive::entries::{Entry, EntryKind};
use crate::archive::ArchiveError;

/// Write `entries` as a zip archive at `path`. Members are stored uncompressed.
pub fn write_zip(path: &Path, entries: &[Entry]) -> Result<(), ArchiveError> {
    let mut zip = ZipWriter::new(File::create(path)?);

    for entry in entries {
        let name = zip_name(&entry.name);
        let meta = fs::symlink_metadata(&entry.source)?;
        let options = entry_options(&meta);

        match &entry.kind {
            EntryKind::Dir => zip.add_directory(name, options)?,
            EntryKind::Symlink(target) => {
                zip.add_symlink(name, target.to_string_lossy().into_owned(), options)?
            }
            EntryKind::File => {
                zip.start_file(name, options)?;
                let mut source = File::open(&entry.source)?;
                io::copy(&mut source, &mut zip)?;
            }
        }
    }

    let file = zip.finish()?;
    file.sync_all()?;
    Ok(())
}

fn entry_options(meta: &fs::Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Stored)
        .large_file(meta.len() >= u64::from(u32::MAX));

    // Zip timestamps cannot express anything before 1980; those keep the default.
    let options = match modified_time(meta) {
        Some(stamp) => options.last_modified_time(stamp),
        None => options,
    };

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(meta.permissions().mode() & 0o7777)
    };

    options
}

/// File mtime as a zip timestamp, in UTC.
fn modified_time(meta: &fs::Metadata) -> Option<DateTime> {
    let utc = OffsetDateTime::from(meta.modified().ok()?);
    DateTime::try_from(PrimitiveDateTime::new(utc.date(), utc.time())).ok()
}

/// Zip member names always use `/`.
fn zip_name(name: &Path) -> String {
    name.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
