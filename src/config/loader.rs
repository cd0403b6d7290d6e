//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use ini::{Ini, ParseOption};
use thiserror::Error;

use crate::config::schema::{AppConfig, InputFiles, RawAppSection, RawConfigFile, APP_SECTION};
use crate::config::validation::{validate_section, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("INI parse error: {0}")]
    Ini(#[from] ini::ParseError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing [{0}] section")]
    MissingSection(&'static str),

    #[error("missing key '{0}' in [app] section")]
    MissingKey(&'static str),

    #[error("key '{key}' must be an integer, got '{value}'")]
    InvalidInteger { key: &'static str, value: String },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from an INI or TOML file.
///
/// Files ending in `.toml` are read as TOML; anything else as INI.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    tracing::debug!(path = %path.display(), "Reading configuration");

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = if is_toml(path) {
        parse_toml(&content)?
    } else {
        parse_ini(&content)?
    };

    validate_section(&raw).map_err(ConfigError::Validation)
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}

/// Parse the `[app]` section of a TOML document.
pub fn parse_toml(content: &str) -> Result<RawAppSection, ConfigError> {
    let file: RawConfigFile = toml::from_str(content)?;
    Ok(file.app)
}

/// Parse the `[app]` section of an INI document.
///
/// Backslash escapes are left alone so Windows paths survive.
pub fn parse_ini(content: &str) -> Result<RawAppSection, ConfigError> {
    let options = ParseOption {
        enabled_escape: false,
        ..ParseOption::default()
    };
    let ini = Ini::load_from_str_opt(content, options)?;
    let app = ini
        .section(Some(APP_SECTION))
        .ok_or(ConfigError::MissingSection(APP_SECTION))?;

    let get = |key: &'static str| app.get(key).ok_or(ConfigError::MissingKey(key));

    let level = get("compress_level")?;
    let compress_level = level
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidInteger {
            key: "compress_level",
            value: level.to_string(),
        })?;

    Ok(RawAppSection {
        input_files: InputFiles::Joined(get("input_files")?.to_string()),
        output_file: get("output_file")?.to_string(),
        archive_type: get("archive_type")?.to_string(),
        compress_level,
    })
}
