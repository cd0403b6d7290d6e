//! Tar writer with optional gzip, bzip2 or xz stream compression.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use bzip2::write::BzEncoder;
use flate2::write::GzEncoder;
use xz2::write::XzEncoder;

use crate::archive::entries::{Entry, EntryKind};
use crate::archive::ArchiveError;
use crate::config::TarCodec;

/// xz preset used for `.xz` archives.
const XZ_PRESET: u32 = 6;

/// Write `entries` as a tar archive at `path`.
pub fn write_tar(path: &Path, codec: TarCodec, entries: &[Entry]) -> Result<(), ArchiveError> {
    let writer = BufWriter::new(File::create(path)?);

    let writer = match codec {
        TarCodec::None => append_entries(writer, entries)?,
        TarCodec::Gzip => {
            append_entries(GzEncoder::new(writer, flate2::Compression::best()), entries)?.finish()?
        }
        TarCodec::Bzip2 => {
            append_entries(BzEncoder::new(writer, bzip2::Compression::best()), entries)?.finish()?
        }
        TarCodec::Xz => append_entries(XzEncoder::new(writer, XZ_PRESET), entries)?.finish()?,
    };

    let file = writer.into_inner().map_err(|e| e.into_error())?;
    file.sync_all()?;
    Ok(())
}

/// Append every entry and terminate the tar stream, handing back the writer.
fn append_entries<W: Write>(writer: W, entries: &[Entry]) -> Result<W, ArchiveError> {
    let mut builder = tar::Builder::new(writer);
    builder.follow_symlinks(false);

    for entry in entries {
        match entry.kind {
            EntryKind::Dir => builder.append_dir(&entry.name, &entry.source)?,
            EntryKind::File | EntryKind::Symlink(_) => {
                builder.append_path_with_name(&entry.source, &entry.name)?
            }
        }
    }

    Ok(builder.into_inner()?)
}
