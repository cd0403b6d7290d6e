//! Configuration schema definitions.
//!
//! `RawAppSection` is the syntactic shape of the `[app]` section as it comes
//! out of the INI or TOML parser. `AppConfig` is what remains after
//! validation and is the only form the rest of the program sees.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Name of the configuration section holding all keys.
pub const APP_SECTION: &str = "app";

/// Archive format requested by the `archive_type` key.
///
/// The variants keep the spelling the user wrote so logs echo it back
/// unchanged, even though several spellings share an encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveType {
    Tar,
    TarGz,
    Tgz,
    Gz,
    Bz2,
    Xz,
    Zip,
}

/// Container and codec an `ArchiveType` is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveFormat {
    Tar(TarCodec),
    Zip,
}

/// Stream codec wrapped around a tar container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TarCodec {
    None,
    Gzip,
    Bzip2,
    Xz,
}

impl ArchiveType {
    pub const ALL: [ArchiveType; 7] = [
        ArchiveType::Tar,
        ArchiveType::TarGz,
        ArchiveType::Tgz,
        ArchiveType::Gz,
        ArchiveType::Bz2,
        ArchiveType::Xz,
        ArchiveType::Zip,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArchiveType::Tar => "tar",
            ArchiveType::TarGz => "tar.gz",
            ArchiveType::Tgz => "tgz",
            ArchiveType::Gz => "gz",
            ArchiveType::Bz2 => "bz2",
            ArchiveType::Xz => "xz",
            ArchiveType::Zip => "zip",
        }
    }

    /// `gz` is a gzip-compressed tar, same as `tar.gz`.
    pub fn format(&self) -> ArchiveFormat {
        match self {
            ArchiveType::Tar => ArchiveFormat::Tar(TarCodec::None),
            ArchiveType::TarGz | ArchiveType::Tgz | ArchiveType::Gz => {
                ArchiveFormat::Tar(TarCodec::Gzip)
            }
            ArchiveType::Bz2 => ArchiveFormat::Tar(TarCodec::Bzip2),
            ArchiveType::Xz => ArchiveFormat::Tar(TarCodec::Xz),
            ArchiveType::Zip => ArchiveFormat::Zip,
        }
    }
}

impl fmt::Display for ArchiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when `archive_type` is not one of the supported spellings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownArchiveType(pub String);

impl FromStr for ArchiveType {
    type Err = UnknownArchiveType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ArchiveType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownArchiveType(s.to_string()))
    }
}

/// `input_files` as written: a comma-joined string (INI, TOML) or a list (TOML).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum InputFiles {
    Joined(String),
    List(Vec<String>),
}

impl InputFiles {
    /// Trimmed, non-empty entries in configuration order.
    pub fn entries(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            InputFiles::Joined(s) => s.split(',').collect(),
            InputFiles::List(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// The `[app]` section before semantic checks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawAppSection {
    pub input_files: InputFiles,
    pub output_file: String,
    pub archive_type: String,
    pub compress_level: i64,
}

/// Root of a TOML configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawConfigFile {
    pub app: RawAppSection,
}

/// Validated configuration for one archive build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Files and directories added by the first pass, in order.
    pub input_files: Vec<PathBuf>,

    /// Final archive location.
    pub output_file: PathBuf,

    pub archive_type: ArchiveType,

    /// Total number of passes; 1 means no self-nesting.
    pub compress_level: u32,
}
