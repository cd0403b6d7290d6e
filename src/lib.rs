//! Configuration-driven archive builder.
//!
//! Reads an `[app]` section (input files, output path, archive type,
//! compress level), writes the archive, and optionally nests it inside
//! itself `compress_level - 1` more times. SIGHUP reloads the configuration.

pub mod archive;
pub mod cli;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use archive::{build_archive, BuildReport};
pub use config::{AppConfig, ArchiveType, ConfigStore};
pub use error::Error;
