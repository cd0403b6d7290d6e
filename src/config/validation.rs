//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (the parsers handle syntax)
//! - Reject empty input lists and output paths
//! - Check the archive type against the supported set
//! - Validate the compress level range
//!
//! Every violation is reported, not just the first, so one run shows the
//! whole list of things to fix.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::{AppConfig, ArchiveType, RawAppSection};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("input files are empty")]
    NoInputFiles,

    #[error("output file is empty")]
    EmptyOutputFile,

    #[error("archive type '{0}' is invalid")]
    UnknownArchiveType(String),

    #[error("compress level {0} is invalid")]
    InvalidCompressLevel(i64),
}

/// Turn a raw `[app]` section into an `AppConfig`.
pub fn validate_section(raw: &RawAppSection) -> Result<AppConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let input_files: Vec<PathBuf> = raw.input_files.entries().into_iter().map(PathBuf::from).collect();
    if input_files.is_empty() {
        errors.push(ValidationError::NoInputFiles);
    }

    let output_file = raw.output_file.trim();
    if output_file.is_empty() {
        errors.push(ValidationError::EmptyOutputFile);
    }

    let archive_type = match raw.archive_type.parse::<ArchiveType>() {
        Ok(t) => Some(t),
        Err(e) => {
            errors.push(ValidationError::UnknownArchiveType(e.0));
            None
        }
    };

    let compress_level = match u32::try_from(raw.compress_level) {
        Ok(level) if level > 0 => Some(level),
        _ => {
            errors.push(ValidationError::InvalidCompressLevel(raw.compress_level));
            None
        }
    };

    match (archive_type, compress_level) {
        (Some(archive_type), Some(compress_level)) if errors.is_empty() => Ok(AppConfig {
            input_files,
            output_file: PathBuf::from(output_file),
            archive_type,
            compress_level,
        }),
        _ => Err(errors),
    }
}
